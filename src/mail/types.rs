//! Mail types for the feedback relay.

use thiserror::Error;

/// Placeholder used when the submitter leaves out their name.
pub const DEFAULT_NAME: &str = "Anonymous";

/// Placeholder used when the client does not report its version.
pub const DEFAULT_APP_VERSION: &str = "Unknown";

/// A validated feedback submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Submitter name.
    pub name: String,
    /// Submitter email address, used as the reply-to address.
    pub email: String,
    /// Version of the submitting application.
    pub app_version: String,
    /// Feedback text.
    pub message: String,
}

impl Feedback {
    /// Create a feedback submission, filling blank optional fields with placeholders.
    pub fn new(
        email: impl Into<String>,
        message: impl Into<String>,
        name: Option<&str>,
        app_version: Option<&str>,
    ) -> Self {
        Self {
            name: non_blank_or(name, DEFAULT_NAME),
            email: email.into(),
            app_version: non_blank_or(app_version, DEFAULT_APP_VERSION),
            message: message.into(),
        }
    }
}

fn non_blank_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Fixed envelope for relayed feedback.
#[derive(Debug, Clone)]
pub struct MailSettings {
    /// Verified sender address.
    pub from: String,
    /// Destination address.
    pub to: String,
    /// Subject line.
    pub subject: String,
}

/// An email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Reply-to address.
    pub reply_to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

/// Email delivery errors.
#[derive(Error, Debug)]
pub enum MailError {
    /// The HTTP client could not be built.
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    /// The provider could not be reached or the response could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider rejected the message.
    #[error("provider rejected message ({status}): {message}")]
    Rejected {
        /// HTTP status returned by the provider.
        status: u16,
        /// Provider error message.
        message: String,
    },
}
