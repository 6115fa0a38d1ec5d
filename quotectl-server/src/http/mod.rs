//! HTTP server layer
//!
//! Axum server with:
//! - `/` public display page
//! - `/manage` CRUD page
//! - `/health` JSON probe
//! - Request tracing and graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
