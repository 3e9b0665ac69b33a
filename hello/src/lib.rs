//! Hello World
//!
//! Library half of the `hello` binary: the greeting, the (ignored) command
//! line, logging setup and the error type.

#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod greeting;
pub mod logging;

pub use cli::Cli;
pub use error::{HelloError, Result};
pub use greeting::{GREETING, print_greeting, write_greeting};
pub use logging::{LogConfig, init_logging};
