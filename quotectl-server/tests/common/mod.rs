//! In-memory quote store for handler and router tests

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quotectl_server::models::{EntryId, EntryText, Quote};
use quotectl_server::{DbError, QuoteStore};

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Connection,
    Query,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: Vec<Quote>,
    failure: Option<Failure>,
}

/// Vec-backed store; "random" picks are the newest matching row.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row directly, bypassing validation
    pub fn seed(&self, phrase: Option<&str>, jokes: Option<&str>, created_at: DateTime<Utc>) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.push(Quote {
            id,
            phrase: phrase.map(str::to_owned),
            jokes: jokes.map(str::to_owned),
            created_at,
        });
        id
    }

    /// Make every following call fail
    pub fn fail_with(&self, failure: Failure) {
        self.inner.lock().unwrap().failure = Some(failure);
    }

    pub fn rows(&self) -> Vec<Quote> {
        sorted(self.inner.lock().unwrap().rows.clone())
    }

    pub fn find(&self, id: i64) -> Option<Quote> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|q| q.id == id)
            .cloned()
    }

    fn check(&self) -> Result<(), DbError> {
        match self.inner.lock().unwrap().failure {
            Some(Failure::Connection) => Err(DbError::Connection(sqlx::Error::PoolTimedOut)),
            Some(Failure::Query) => Err(DbError::Query(sqlx::Error::RowNotFound)),
            None => Ok(()),
        }
    }
}

fn sorted(mut rows: Vec<Quote>) -> Vec<Quote> {
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    rows
}

#[async_trait]
impl QuoteStore for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        self.check()
    }

    async fn count(&self) -> Result<i64, DbError> {
        self.check()?;
        Ok(self.inner.lock().unwrap().rows.len() as i64)
    }

    async fn random_phrase(&self) -> Result<Option<String>, DbError> {
        self.check()?;
        Ok(self
            .rows()
            .into_iter()
            .find_map(|q| q.phrase_text().map(str::to_owned)))
    }

    async fn random_joke(&self) -> Result<Option<String>, DbError> {
        self.check()?;
        Ok(self
            .rows()
            .into_iter()
            .find_map(|q| q.jokes_text().map(str::to_owned)))
    }

    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, DbError> {
        self.check()?;
        Ok(self
            .rows()
            .into_iter()
            .filter(|q| q.created_at >= start && q.created_at < end)
            .collect())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Quote>, DbError> {
        self.check()?;
        Ok(self
            .rows()
            .into_iter()
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Quote>, DbError> {
        self.check()?;
        Ok(self.rows())
    }

    async fn get(&self, id: EntryId) -> Result<Option<Quote>, DbError> {
        self.check()?;
        Ok(self.find(id.get()))
    }

    async fn insert(&self, text: &EntryText) -> Result<Quote, DbError> {
        self.check()?;
        let id = self.seed(text.phrase(), text.jokes(), Utc::now());
        Ok(self.find(id).expect("just inserted"))
    }

    async fn update(&self, id: EntryId, text: &EntryText) -> Result<u64, DbError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.iter_mut().find(|q| q.id == id.get()) {
            Some(row) => {
                row.phrase = text.phrase().map(str::to_owned);
                row.jokes = text.jokes().map(str::to_owned);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: EntryId) -> Result<u64, DbError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|q| q.id != id.get());
        Ok((before - inner.rows.len()) as u64)
    }
}
