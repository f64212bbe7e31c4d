//! Error types for the keypad core
//!
//! The keypad operations themselves are total. Errors only surface when
//! values are constructed from untrusted input (raw integers, explicit
//! layouts, configuration files).

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Keypad core errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Value outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(String),

    /// Sequence is not a permutation of 0-9
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Length policy bounds are inconsistent
    #[error("Invalid length policy: {0}")]
    InvalidPolicy(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
