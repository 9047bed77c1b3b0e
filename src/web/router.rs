//! Router configuration for the HTTP API.

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{issue_token, method_not_allowed, not_found, submit_feedback, AppState};
use super::middleware::{allow_origin_header, cors_headers, handle_panic, preflight};
use crate::config::ServerConfig;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, config: &ServerConfig) -> Router {
    let feedback_route = get(issue_token)
        .post(submit_feedback)
        .options(preflight)
        .head(method_not_allowed)
        .fallback(method_not_allowed);

    Router::new()
        .route("/", feedback_route)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    allow_origin_header(&config.cors_allow_origin),
                    cors_headers,
                ))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
