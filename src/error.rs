//! Error taxonomy for select sessions.
//!
//! - `Configuration`: raised during setup, before anything is rendered
//! - `Index`: registry queried outside `[1, size]`
//! - `Io` / `Interrupted`: terminal driver failures, propagated unchanged

use thiserror::Error;

/// Everything that can abort a select session.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("choice index {index} out of range 1..={size}")]
    Index { index: usize, size: usize },

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("interrupted")]
    Interrupted,
}

impl SelectError {
    /// Shorthand for a setup-time configuration failure.
    pub fn configuration(msg: impl Into<String>) -> Self {
        SelectError::Configuration(msg.into())
    }
}

/// Result type alias for SelectError.
pub type Result<T> = std::result::Result<T, SelectError>;
