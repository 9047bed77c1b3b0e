//! Middleware for the HTTP API.

pub mod cors;
pub mod panic;

pub use cors::{allow_origin_header, cors_headers, preflight};
pub use panic::handle_panic;
