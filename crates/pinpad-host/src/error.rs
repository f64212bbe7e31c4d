//! Host errors

/// Host-side keypad errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tap on a position that has no digit button
    #[error("Invalid key position: {0}")]
    InvalidPosition(usize),

    /// Tap while no layout is shown
    #[error("Keypad is hidden")]
    KeypadHidden,

    /// Input line could not be understood
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Core error
    #[error(transparent)]
    Core(#[from] pinpad_core::Error),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
