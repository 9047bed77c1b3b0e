//! Cross-origin headers.
//!
//! The endpoint is called from desktop-app webviews whose origin is not known
//! in advance, so every response except 405 carries an open
//! `Access-Control-Allow-Origin`. Preflight replies and 404s for unknown paths
//! get it too. A refused method, HEAD included, is answered without it.

use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
        },
        HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::web::error::ALLOWED_METHODS;

/// Headers a client may send.
const ALLOWED_HEADERS: &str = "Content-Type";

/// How long a browser may cache a preflight result, in seconds.
const PREFLIGHT_MAX_AGE: &str = "86400";

/// Build the `Access-Control-Allow-Origin` value from configuration.
///
/// Falls back to `*` when the configured value is not a valid header value.
pub fn allow_origin_header(origin: &str) -> HeaderValue {
    match HeaderValue::from_str(origin.trim()) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            tracing::warn!(origin, "Invalid CORS origin, allowing any origin");
            HeaderValue::from_static("*")
        }
    }
}

/// Add `Access-Control-Allow-Origin` to every response except 405.
pub async fn cors_headers(
    State(allow_origin): State<HeaderValue>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        response
            .headers_mut()
            .insert(ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    }
    response
}

/// OPTIONS / - CORS preflight. Empty body.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
            (ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE),
        ],
    )
}
