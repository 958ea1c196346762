//! Client Error Types

use thiserror::Error;

/// Client result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from the rewards client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Connection-level failure (no response received). Retryable.
    #[error("API connection error: {message}")]
    Connection { message: String },

    /// The server rejected the request (non-2xx with a message)
    #[error("API request failed: {status} - {message}")]
    Api { status: u16, message: String },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Core protocol error
    #[error("Core error: {0}")]
    Core(#[from] rewards_core::CoreError),
}

impl ClientError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        ClientError::Config {
            message: message.into(),
        }
    }

    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        ClientError::Connection {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this is a server-side rejection (as opposed to transport)
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }

    /// HTTP status for server rejections
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ClientError::Config { .. } => 1,
            ClientError::Connection { .. } => 3,
            ClientError::Api { .. } => 4,
            ClientError::Io(_) => 5,
            ClientError::Json(_) => 6,
            ClientError::Http(_) => 7,
            ClientError::Core(_) => 10,
        }
    }
}
