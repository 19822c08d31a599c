use thiserror::Error;

/// Unified error type for bump-check operations
#[derive(Error, Debug)]
pub enum BumpCheckError {
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    #[error("Version was not bumped: {0}")]
    NoChange(String),

    #[error("Invalid version bump: {0}")]
    InvalidBump(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output sink error: {0}")]
    Sink(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump-check
pub type Result<T> = std::result::Result<T, BumpCheckError>;

impl BumpCheckError {
    /// Create a format error with context
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        BumpCheckError::InvalidFormat(msg.into())
    }

    /// Create a no-change error with context
    pub fn no_change(msg: impl Into<String>) -> Self {
        BumpCheckError::NoChange(msg.into())
    }

    /// Create a bump error with context
    pub fn invalid_bump(msg: impl Into<String>) -> Self {
        BumpCheckError::InvalidBump(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpCheckError::Config(msg.into())
    }

    /// Create a sink error with context
    pub fn sink(msg: impl Into<String>) -> Self {
        BumpCheckError::Sink(msg.into())
    }
}
