//! Error types for the feedback relay.

use thiserror::Error;

use crate::mail::MailError;

/// Common error type for the feedback relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Email delivery error.
    #[error("mail error: {0}")]
    Mail(#[from] MailError),
}

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;
