//! Database layer - connection pool, schema, store port and repository
//!
//! # Design Principles
//!
//! - One shared pool, opened eagerly at startup
//! - Bound parameters only, never string-built SQL
//! - One statement per mutation, the store's autocommit is the only transaction
//! - Every failure comes back as a `DbError`, nothing is swallowed

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use error::DbError;
pub use pool::{connect, connect_options};
pub use repos::QuoteRepo;
pub use store::QuoteStore;
