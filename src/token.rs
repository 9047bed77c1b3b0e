//! Stateless submission tokens.
//!
//! A token is `<timestamp>.<signature>`, where `timestamp` is the issue time in
//! milliseconds since the Unix epoch and `signature` is the base64-encoded
//! HMAC-SHA256 of the timestamp string under the server secret. Verification
//! recomputes the signature, so no server-side storage is needed.
//!
//! A captured token can be replayed any number of times until it expires.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Duration, Utc};
use hmac::{digest::KeyInit, Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Separator between the timestamp and signature parts.
pub const TOKEN_SEPARATOR: char = '.';

/// Default token lifetime in seconds.
pub const DEFAULT_EXPIRY_SECS: u64 = 300;

/// Reasons a presented token is rejected.
///
/// The `Display` text is returned to the client as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// No token was presented.
    #[error("Token required")]
    Missing,
    /// The token is not `<timestamp>.<signature>` with an integer timestamp.
    #[error("Invalid token format")]
    InvalidFormat,
    /// The token is older than the expiry window, or issued in the future.
    #[error("Token expired")]
    Expired,
    /// The signature does not match the timestamp.
    #[error("Invalid token signature")]
    InvalidSignature,
}

/// Issues and verifies tokens with a fixed secret and expiry window.
#[derive(Clone)]
pub struct TokenSigner {
    mac: HmacSha256,
    expiry: Duration,
}

impl TokenSigner {
    /// Create a signer for the given secret and expiry window.
    ///
    /// HMAC pads or hashes the key to its block size, so any secret length
    /// (including empty) is accepted and this never panics.
    pub fn new(secret: &str, expiry: Duration) -> Self {
        let mac = <HmacSha256 as KeyInit>::new_from_slice(secret.as_bytes())
            .expect("key length is unrestricted");
        Self { mac, expiry }
    }

    /// Create a signer with an expiry given in seconds.
    pub fn with_expiry_secs(secret: &str, expiry_secs: u64) -> Self {
        let secs = i64::try_from(expiry_secs)
            .unwrap_or(i64::MAX)
            .min(i64::MAX / 1000);
        Self::new(secret, Duration::seconds(secs))
    }

    /// Expiry window.
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Issue a token stamped with the current time.
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now())
    }

    /// Issue a token stamped with `now`.
    pub fn issue_at(&self, now: DateTime<Utc>) -> String {
        let timestamp = now.timestamp_millis().to_string();
        let signature = self.sign(&timestamp);
        format!("{timestamp}{TOKEN_SEPARATOR}{signature}")
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<(), TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against `now`.
    ///
    /// Checks run in order (presence, format, expiry, signature) and stop at
    /// the first failure.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<(), TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::Missing);
        }

        let (timestamp, signature) = split_token(token)?;

        let issued_ms: i64 = timestamp.parse().map_err(|_| TokenError::InvalidFormat)?;
        let age_ms = now
            .timestamp_millis()
            .checked_sub(issued_ms)
            .ok_or(TokenError::Expired)?;
        if age_ms < 0 || age_ms > self.expiry.num_milliseconds() {
            return Err(TokenError::Expired);
        }

        let presented = STANDARD
            .decode(signature)
            .map_err(|_| TokenError::InvalidSignature)?;
        let mut mac = self.mac.clone();
        mac.update(timestamp.as_bytes());
        mac.verify_slice(&presented)
            .map_err(|_| TokenError::InvalidSignature)
    }

    fn sign(&self, timestamp: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(timestamp.as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[redacted]")
            .field("expiry", &self.expiry)
            .finish()
    }
}

/// Split a token into exactly two non-empty parts.
fn split_token(token: &str) -> Result<(&str, &str), TokenError> {
    let (timestamp, signature) = token
        .split_once(TOKEN_SEPARATOR)
        .ok_or(TokenError::InvalidFormat)?;
    if timestamp.is_empty() || signature.is_empty() || signature.contains(TOKEN_SEPARATOR) {
        return Err(TokenError::InvalidFormat);
    }
    Ok((timestamp, signature))
}
