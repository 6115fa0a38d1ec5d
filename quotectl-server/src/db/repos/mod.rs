//! Repository implementations for database access

pub mod quotes;

pub use quotes::QuoteRepo;
