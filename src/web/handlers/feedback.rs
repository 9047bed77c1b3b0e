//! Feedback submission handler.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::AppState;
use crate::mail::{compose_feedback_email, Feedback};
use crate::web::dto::{FeedbackRequest, SuccessResponse};
use crate::web::error::ApiError;

/// POST / - Verify the token, validate the submission and relay it by email.
///
/// The body is parsed as JSON whatever the declared content type, since
/// embedded webviews often post `text/plain` to avoid a preflight.
pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let body = body.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large("Request body too large")
        } else {
            ApiError::bad_request("Invalid JSON")
        }
    })?;

    let req: FeedbackRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Malformed feedback body");
        ApiError::bad_request("Invalid JSON")
    })?;

    state.signer.verify(req.token.as_deref().unwrap_or_default())?;

    let message = required(req.message.as_deref())
        .ok_or_else(|| ApiError::bad_request("Message is required"))?;
    let email = required(req.email.as_deref())
        .ok_or_else(|| ApiError::bad_request("Email is required"))?;

    let feedback = Feedback::new(email, message, req.name.as_deref(), req.app_version.as_deref());
    let outgoing = compose_feedback_email(&state.mail_settings, &feedback);

    state.mailer.send(outgoing).await?;

    tracing::info!(
        app_version = %feedback.app_version,
        message_len = feedback.message.len(),
        "Feedback relayed"
    );

    Ok(Json(SuccessResponse::ok()))
}

/// Trimmed value of a required field, or `None` when absent or blank.
fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
