//! HTTP server for the invoice and report endpoints
//!
//! - `handlers`: one axum handler per endpoint
//! - `router`: route table plus health checks
//! - `builder`: `ServerBuilder` with store injection and graceful shutdown

pub mod builder;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use error::ApiError;
pub use handlers::AppState;
