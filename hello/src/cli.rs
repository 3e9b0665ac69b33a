//! Command line model.
//!
//! The program takes no options. Every argument, including things that look
//! like flags (`--help`, `-V`, `--verbose`), lands in [`Cli::args`] and is
//! otherwise ignored.

use std::ffi::OsString;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "hello")]
#[command(about = "Prints Hello World")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments, accepted and ignored
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse the command line without ever failing.
    ///
    /// If clap rejects the input the error is handed back alongside an empty
    /// `Cli` so the caller can log it; output does not depend on arguments.
    pub fn parse_lenient<I, T>(itr: I) -> (Self, Option<clap::Error>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(itr) {
            Ok(cli) => (cli, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}
