//! Response DTOs.

use serde::Serialize;

/// Token issue response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Submission token.
    pub token: String,
}

/// Successful submission response.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
}

impl SuccessResponse {
    /// Create a success response.
    pub fn ok() -> Self {
        Self { success: true }
    }
}
