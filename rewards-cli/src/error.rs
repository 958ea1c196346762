//! CLI Error Types

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Rewards client error
    #[error("{0}")]
    Client(#[from] rewards_client::ClientError),

    /// Scan pipeline error
    #[error("Scan error: {0}")]
    Scan(#[from] rewards_scan::ScanError),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_arg(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgument { .. } => 2,
            CliError::Client(e) => e.exit_code(),
            CliError::Io(_) => 5,
            CliError::Scan(_) => 8,
        }
    }
}
