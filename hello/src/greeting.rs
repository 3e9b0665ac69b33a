//! The greeting and the code that writes it.

use std::io::{self, Write};

use tracing::trace;

use crate::error::Result;

/// Text printed on every invocation.
pub const GREETING: &str = "Hello World";

/// Write the greeting as a single line and flush.
pub fn write_greeting<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{GREETING}")?;
    out.flush()?;
    trace!(bytes = GREETING.len() + 1, "greeting written");
    Ok(())
}

/// Write the greeting to standard output.
pub fn print_greeting() -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_greeting(&mut handle)
}
