//! Outbound email delivery.
//!
//! Feedback is relayed through a transactional email provider. The
//! [`Mailer`] trait is the seam between the web handlers and the provider;
//! [`ResendMailer`] is the production implementation.

mod resend;
mod sender;
mod template;
mod types;

pub use resend::{ResendMailer, DEFAULT_API_URL};
pub use sender::{Mailer, SharedMailer};
pub use template::{compose_feedback_email, escape_html, render_feedback_html};
pub use types::{
    Feedback, MailError, MailSettings, OutgoingEmail, DEFAULT_APP_VERSION, DEFAULT_NAME,
};
