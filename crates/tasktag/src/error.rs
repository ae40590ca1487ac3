use std::fmt;

/// Unified error type for the tasktag crate.
#[derive(Debug, Clone)]
pub enum TagError {
    /// Invalid input provided by the caller.
    InvalidInput(String),
    /// Internal error.
    Internal(String),
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            TagError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for TagError {}

/// Result type alias using [`TagError`].
pub type TagResult<T> = Result<T, TagError>;
