//! Mailer trait abstraction.

use std::sync::Arc;

use async_trait::async_trait;

use super::{MailError, OutgoingEmail};

/// Trait for sending a single email.
///
/// Implementations must not retry; a failed send is reported to the caller.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send an email.
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

/// Mailer shared across request handlers.
pub type SharedMailer = Arc<dyn Mailer>;
