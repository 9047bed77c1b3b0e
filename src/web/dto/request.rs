//! Request DTOs.

use serde::Deserialize;

/// Feedback submission body.
///
/// Every field is optional at the parsing stage so that missing values are
/// reported by the handler in a fixed order (token first, then fields).
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackRequest {
    /// Feedback text.
    #[serde(default)]
    pub message: Option<String>,
    /// Submitter email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Submitter name.
    #[serde(default)]
    pub name: Option<String>,
    /// Version of the submitting application.
    #[serde(default, rename = "appVersion", alias = "app_version")]
    pub app_version: Option<String>,
    /// Submission token from `GET /`.
    #[serde(default)]
    pub token: Option<String>,
}
