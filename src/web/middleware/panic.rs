//! Panic recovery for request handlers.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::web::error::ApiError;

/// Convert a handler panic into a generic 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "Request handler panicked");

    ApiError::internal("Internal server error").into_response()
}
