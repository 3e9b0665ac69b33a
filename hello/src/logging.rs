//! Diagnostic logging.
//!
//! Logs go to stderr and are off unless `HELLO_LOG` asks for them, so
//! standard output only ever carries the greeting.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "HELLO_LOG";

/// Filter used when the configured directive does not parse.
const FALLBACK_LEVEL: &str = "warn";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl LogConfig {
    /// Read the filter from `HELLO_LOG`, falling back to `default`.
    pub fn from_env(default: &str) -> Self {
        Self::resolve(default, std::env::var(LOG_ENV).ok())
    }

    fn resolve(default: &str, value: Option<String>) -> Self {
        let level = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string());
        Self { level }
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: FALLBACK_LEVEL.to_string(),
        }
    }
}

/// Install the global stderr subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(config: &LogConfig) -> bool {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(config.filter())
        .try_init()
        .is_ok()
}
