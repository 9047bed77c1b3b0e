//! Configuration module for the feedback relay.

use serde::Deserialize;
use std::path::Path;

use crate::mail::{MailSettings, DEFAULT_API_URL};
use crate::token::DEFAULT_EXPIRY_SECS;
use crate::{RelayError, Result};

/// Environment variable overriding `token.secret`.
pub const ENV_TOKEN_SECRET: &str = "FEEDBACK_TOKEN_SECRET";
/// Environment variable overriding `mail.api_key`.
pub const ENV_MAIL_API_KEY: &str = "FEEDBACK_MAIL_API_KEY";
/// Environment variable overriding `mail.to_address`.
pub const ENV_MAIL_TO: &str = "FEEDBACK_MAIL_TO";
/// Environment variable overriding `mail.from_address`.
pub const ENV_MAIL_FROM: &str = "FEEDBACK_MAIL_FROM";

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Value of the `Access-Control-Allow-Origin` header.
    #[serde(default = "default_cors_allow_origin")]
    pub cors_allow_origin: String,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_cors_allow_origin() -> String {
    "*".to_string()
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allow_origin: default_cors_allow_origin(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Token configuration.
#[derive(Clone, Deserialize)]
pub struct TokenConfig {
    /// Signing secret (must be set).
    #[serde(default)]
    pub secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_token_expiry")]
    pub expiry_secs: u64,
}

fn default_token_expiry() -> u64 {
    DEFAULT_EXPIRY_SECS
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiry_secs: default_token_expiry(),
        }
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &redact(&self.secret))
            .field("expiry_secs", &self.expiry_secs)
            .finish()
    }
}

/// Email provider configuration.
#[derive(Clone, Deserialize)]
pub struct MailConfig {
    /// Provider API key (must be set).
    #[serde(default)]
    pub api_key: String,
    /// Provider send endpoint.
    #[serde(default = "default_mail_api_url")]
    pub api_url: String,
    /// Destination address for feedback (must be set).
    #[serde(default)]
    pub to_address: String,
    /// Verified sender address (must be set).
    #[serde(default)]
    pub from_address: String,
    /// Subject line of relayed feedback.
    #[serde(default = "default_mail_subject")]
    pub subject: String,
    /// Connect timeout in seconds.
    #[serde(default = "default_mail_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_mail_total_timeout")]
    pub total_timeout_secs: u64,
}

fn default_mail_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_mail_subject() -> String {
    "New Feedback".to_string()
}

fn default_mail_connect_timeout() -> u64 {
    10
}

fn default_mail_total_timeout() -> u64 {
    30
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_mail_api_url(),
            to_address: String::new(),
            from_address: String::new(),
            subject: default_mail_subject(),
            connect_timeout_secs: default_mail_connect_timeout(),
            total_timeout_secs: default_mail_total_timeout(),
        }
    }
}

impl MailConfig {
    /// Envelope used for every relayed message.
    pub fn settings(&self) -> MailSettings {
        MailSettings {
            from: self.from_address.clone(),
            to: self.to_address.clone(),
            subject: self.subject.clone(),
        }
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("to_address", &self.to_address)
            .field("from_address", &self.from_address)
            .field("subject", &self.subject)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("total_timeout_secs", &self.total_timeout_secs)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; logs always go to stdout.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Token configuration.
    #[serde(default)]
    pub token: TokenConfig,
    /// Email provider configuration.
    #[serde(default)]
    pub mail: MailConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RelayError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| RelayError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides.
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides(&mut self) {
        override_from_env(ENV_TOKEN_SECRET, &mut self.token.secret);
        override_from_env(ENV_MAIL_API_KEY, &mut self.mail.api_key);
        override_from_env(ENV_MAIL_TO, &mut self.mail.to_address);
        override_from_env(ENV_MAIL_FROM, &mut self.mail.from_address);
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("token.secret", &self.token.secret),
            ("mail.api_key", &self.mail.api_key),
            ("mail.to_address", &self.mail.to_address),
            ("mail.from_address", &self.mail.from_address),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(RelayError::Config(format!("{name} must be set")));
            }
        }

        if self.token.expiry_secs == 0 {
            return Err(RelayError::Config(
                "token.expiry_secs must be greater than zero".to_string(),
            ));
        }

        url::Url::parse(&self.mail.api_url)
            .map_err(|e| RelayError::Config(format!("mail.api_url is invalid: {e}")))?;

        Ok(())
    }
}

fn override_from_env(key: &str, target: &mut String) {
    if let Ok(value) = std::env::var(key) {
        if !value.is_empty() {
            *target = value;
        }
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "[redacted]"
    }
}
