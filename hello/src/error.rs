//! Error type for the greeting output path.

/// Errors that can occur while printing the greeting.
#[derive(Debug, thiserror::Error)]
pub enum HelloError {
    #[error("failed to write greeting: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HelloError>;
