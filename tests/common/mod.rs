//! Shared helpers for HTTP API tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tokio::sync::Mutex;

use feedback_relay::config::{MailConfig, ServerConfig};
use feedback_relay::web::create_router;
use feedback_relay::{AppState, MailError, Mailer, OutgoingEmail, TokenSigner};

/// Secret used by every test server.
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

/// How the fake mailer responds.
#[derive(Debug, Clone, Copy)]
pub enum MailerBehavior {
    /// Accept every message.
    Accept,
    /// Report a provider-level rejection.
    Reject,
    /// Report an unreachable provider.
    Unreachable,
    /// Panic inside `send`.
    Panic,
}

/// Mailer that records every message it is asked to send.
pub struct RecordingMailer {
    behavior: MailerBehavior,
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
    pub fn new(behavior: MailerBehavior) -> Self {
        Self {
            behavior,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Messages passed to `send`, in order.
    pub async fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().await.push(email);
        match self.behavior {
            MailerBehavior::Accept => Ok(()),
            MailerBehavior::Reject => Err(MailError::Rejected {
                status: 422,
                message: "The `from` domain is not verified".to_string(),
            }),
            MailerBehavior::Unreachable => {
                Err(MailError::Transport("connection refused".to_string()))
            }
            MailerBehavior::Panic => panic!("mailer exploded"),
        }
    }
}

/// Server configuration for tests.
pub fn test_server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Mail configuration for tests.
pub fn test_mail_config() -> MailConfig {
    MailConfig {
        api_key: "re_test".to_string(),
        to_address: "team@example.com".to_string(),
        from_address: "Feedback <feedback@example.com>".to_string(),
        ..MailConfig::default()
    }
}

/// Signer matching the test server's secret.
pub fn test_signer() -> TokenSigner {
    TokenSigner::with_expiry_secs(TEST_SECRET, 300)
}

/// Create a test server with the given mailer behavior and server configuration.
pub fn create_test_server_with(
    behavior: MailerBehavior,
    config: &ServerConfig,
) -> (TestServer, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::new(behavior));
    let state = AppState::new(test_signer(), mailer.clone(), test_mail_config().settings());
    let router = create_router(Arc::new(state), config);
    let server = TestServer::new(router).expect("Failed to create test server");
    (server, mailer)
}

/// Create a test server with the given mailer behavior.
pub fn create_test_server(behavior: MailerBehavior) -> (TestServer, Arc<RecordingMailer>) {
    create_test_server_with(behavior, &test_server_config())
}
