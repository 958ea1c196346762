//! Scan Error Types
//!
//! "No QR code in this frame" is not represented here - that outcome is
//! [`crate::session::Capture::NothingDetected`]. These errors cover the
//! hardware/permission class (fatal to the session) and encode failures.

use thiserror::Error;

/// Scan result type
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors from the scan pipeline
#[derive(Error, Debug)]
pub enum ScanError {
    /// Frame source cannot deliver frames (device gone, unreadable file,
    /// permission denied). Fatal to the session.
    #[error("Frame source unavailable: {message}")]
    SourceUnavailable { message: String },

    /// A capture attempt is already in flight
    #[error("A capture attempt is already in progress")]
    Busy,

    /// The session was stopped and cannot capture
    #[error("Scan session is stopped")]
    Stopped,

    /// Invalid frame geometry
    #[error("Invalid frame: {message}")]
    InvalidFrame { message: String },

    /// QR encoding failed
    #[error("QR encode error: {message}")]
    Encode { message: String },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Create a source unavailable error
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        ScanError::SourceUnavailable {
            message: message.into(),
        }
    }

    /// Create an invalid frame error
    pub fn invalid_frame(message: impl Into<String>) -> Self {
        ScanError::InvalidFrame {
            message: message.into(),
        }
    }

    /// Create an encode error
    pub fn encode(message: impl Into<String>) -> Self {
        ScanError::Encode {
            message: message.into(),
        }
    }
}
