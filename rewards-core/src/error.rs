//! Core Error Types

use thiserror::Error;

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors from the core protocol types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Illegal issuance state transition
    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: &'static str, to: &'static str },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid value
    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}

impl CoreError {
    /// Create an invalid transition error
    pub fn invalid_transition(from: &'static str, to: &'static str) -> Self {
        CoreError::InvalidTransition { from, to }
    }

    /// Create an invalid value error
    pub fn invalid_value(message: impl Into<String>) -> Self {
        CoreError::InvalidValue {
            message: message.into(),
        }
    }
}
