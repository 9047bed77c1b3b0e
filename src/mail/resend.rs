//! Resend transactional email backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{MailError, Mailer, OutgoingEmail};
use crate::config::MailConfig;

/// Default Resend send endpoint.
pub const DEFAULT_API_URL: &str = "https://api.resend.com/emails";

/// User agent string for provider requests.
const USER_AGENT: &str = concat!("feedback-relay/", env!("CARGO_PKG_VERSION"));

/// Request body for the send endpoint.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    reply_to: &'a str,
}

/// Error body returned by the provider.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Mailer that posts messages to the Resend HTTP API.
pub struct ResendMailer {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ResendMailer {
    /// Create a mailer from configuration.
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MailError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let body = SendEmailRequest {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
            reply_to: &email.reply_to,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "Provider accepted message");
            return Ok(());
        }

        let text = response
            .text()
            .await
            .map_err(|e| MailError::Transport(format!("failed to read response: {e}")))?;
        let message = serde_json::from_str::<ProviderErrorBody>(&text)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(text);

        Err(MailError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
