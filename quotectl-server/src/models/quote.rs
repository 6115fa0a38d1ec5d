//! Quote record as stored in the `quotes` table

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored quote: an optional phrase and/or joke
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Quote {
    pub id: i64,
    pub phrase: Option<String>,
    pub jokes: Option<String>,
    /// Set by the store on insert, never updated
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Phrase text, `None` when absent or empty
    pub fn phrase_text(&self) -> Option<&str> {
        non_empty(self.phrase.as_deref())
    }

    /// Joke text, `None` when absent or empty
    pub fn jokes_text(&self) -> Option<&str> {
        non_empty(self.jokes.as_deref())
    }

    pub fn has_phrase(&self) -> bool {
        self.phrase_text().is_some()
    }

    pub fn has_jokes(&self) -> bool {
        self.jokes_text().is_some()
    }
}

/// NULL and '' both mean "no value"
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
