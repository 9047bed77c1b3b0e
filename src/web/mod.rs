//! HTTP interface for the feedback relay.
//!
//! A single endpoint multiplexed on method: `GET` issues a token, `POST`
//! accepts a feedback submission, `OPTIONS` answers CORS preflight.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
