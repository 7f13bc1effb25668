//! Error types and Result aliases for l2met.
//!
//! All public functions return `Result<T, Error>` or `Result<T>`.

use thiserror::Error;

/// Result type alias using l2met's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for l2met operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Connection-URL decode error.
    #[error("decode error: {0}")]
    Decode(String),
}

impl Error {
    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
mod tests;
