//! Token issue handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;
use crate::web::dto::TokenResponse;

/// GET / - Issue a submission token.
pub async fn issue_token(State(state): State<Arc<AppState>>) -> Json<TokenResponse> {
    let token = state.signer.issue();
    tracing::debug!("Issued submission token");
    Json(TokenResponse { token })
}
