//! Store port used by the page handlers
//!
//! Handlers only see this trait; the PostgreSQL repository is one
//! implementation, tests supply an in-memory one.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{EntryId, EntryText, Quote};

use super::DbError;

/// Access to the `quotes` collection
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Cheap round trip to check the store is reachable
    async fn ping(&self) -> Result<(), DbError>;

    /// Total number of entries
    async fn count(&self) -> Result<i64, DbError>;

    /// A random non-empty phrase, if any entry has one
    async fn random_phrase(&self) -> Result<Option<String>, DbError>;

    /// A random non-empty joke, if any entry has one
    async fn random_joke(&self) -> Result<Option<String>, DbError>;

    /// Entries created in `[start, end)`, newest first
    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, DbError>;

    /// The `limit` newest entries
    async fn list_recent(&self, limit: i64) -> Result<Vec<Quote>, DbError>;

    /// Every entry, newest first
    async fn list_all(&self) -> Result<Vec<Quote>, DbError>;

    async fn get(&self, id: EntryId) -> Result<Option<Quote>, DbError>;

    /// Insert a new entry stamped with the store's current time
    async fn insert(&self, text: &EntryText) -> Result<Quote, DbError>;

    /// Overwrite phrase and jokes; returns the number of rows changed
    async fn update(&self, id: EntryId, text: &EntryText) -> Result<u64, DbError>;

    /// Hard delete; returns the number of rows removed
    async fn delete(&self, id: EntryId) -> Result<u64, DbError>;
}
