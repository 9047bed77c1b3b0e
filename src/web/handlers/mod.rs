//! Request handlers.

pub mod feedback;
pub mod token;

use std::sync::Arc;

use crate::config::Config;
use crate::mail::{MailSettings, ResendMailer, SharedMailer};
use crate::token::TokenSigner;
use crate::web::error::ApiError;
use crate::Result;

pub use feedback::submit_feedback;
pub use token::issue_token;

/// Application state shared across handlers.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Token issuer and verifier.
    pub signer: TokenSigner,
    /// Email delivery backend.
    pub mailer: SharedMailer,
    /// Envelope for relayed messages.
    pub mail_settings: MailSettings,
}

impl AppState {
    /// Create a new application state.
    pub fn new(signer: TokenSigner, mailer: SharedMailer, mail_settings: MailSettings) -> Self {
        Self {
            signer,
            mailer,
            mail_settings,
        }
    }

    /// Create the application state from configuration, using the Resend backend.
    pub fn from_config(config: &Config) -> Result<Self> {
        let signer = TokenSigner::with_expiry_secs(&config.token.secret, config.token.expiry_secs);
        let mailer: SharedMailer = Arc::new(ResendMailer::new(&config.mail)?);
        Ok(Self::new(signer, mailer, config.mail.settings()))
    }
}

/// Fallback for methods other than GET, POST and OPTIONS on `/`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
