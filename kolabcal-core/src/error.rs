//! Error types for kolabcal.
//!
//! Conversions themselves never fail (problems are reported through the
//! diagnostics sink); these errors cover the fallible edges around them.

use thiserror::Error;

/// Errors that can occur outside of the mapping itself.
#[derive(Error, Debug)]
pub enum KolabCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Recurrence error: {0}")]
    Recurrence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for kolabcal operations.
pub type KolabCalResult<T> = Result<T, KolabCalError>;
