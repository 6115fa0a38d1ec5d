//! quotectl-server: quote display and management over HTTP
//!
//! A public page shows a random (or today's) phrase and joke; the
//! manage page creates, edits and deletes entries in a single
//! PostgreSQL table.

pub mod db;
pub mod http;
pub mod models;
pub mod render;
pub mod views;

pub use db::{connect, DbError, QuoteRepo, QuoteStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
