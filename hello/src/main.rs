//! Hello World
//!
//! Prints `Hello World` and exits. Arguments are accepted and ignored.

#![forbid(unsafe_code)]

use anyhow::Result;
use hello::{Cli, LogConfig, init_logging, print_greeting};
use tracing::debug;

fn main() -> Result<()> {
    let (cli, parse_error) = Cli::parse_lenient(std::env::args_os());

    init_logging(&LogConfig::from_env("warn"));

    if let Some(err) = parse_error {
        debug!("ignoring unparsable arguments: {}", err);
    }
    debug!(ignored_args = cli.args.len(), "starting");

    print_greeting()?;
    Ok(())
}
