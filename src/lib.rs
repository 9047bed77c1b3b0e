//! Feedback relay.
//!
//! Issues short-lived signed tokens and relays token-gated feedback
//! submissions to a transactional email provider. No state is stored; a
//! token carries everything needed to verify it.

pub mod config;
pub mod error;
pub mod logging;
pub mod mail;
pub mod token;
pub mod web;

pub use config::Config;
pub use error::{RelayError, Result};
pub use mail::{Feedback, MailError, Mailer, OutgoingEmail, ResendMailer};
pub use token::{TokenError, TokenSigner};
pub use web::{create_router, AppState, WebServer};
