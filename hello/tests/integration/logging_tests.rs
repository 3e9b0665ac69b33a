use std::process::Command;

use crate::common::init_test_logging;

#[test]
fn test_debug_logging_stays_off_stdout() {
    init_test_logging();
    crate::test_log!("TEST START: test_debug_logging_stays_off_stdout");

    let output = Command::new(env!("CARGO_BIN_EXE_hello"))
        .arg("--verbose")
        .env("HELLO_LOG", "debug")
        .output()
        .expect("Failed to run hello");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"Hello World\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("starting"), "expected debug log on stderr, got: {stderr}");
    crate::test_log!("TEST PASS: test_debug_logging_stays_off_stdout");
}

#[test]
fn test_invalid_log_filter_is_harmless() {
    init_test_logging();
    crate::test_log!("TEST START: test_invalid_log_filter_is_harmless");

    let output = Command::new(env!("CARGO_BIN_EXE_hello"))
        .env("HELLO_LOG", "hello=notalevel")
        .output()
        .expect("Failed to run hello");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"Hello World\n");
    assert!(output.stderr.is_empty());
    crate::test_log!("TEST PASS: test_invalid_log_filter_is_harmless");
}
