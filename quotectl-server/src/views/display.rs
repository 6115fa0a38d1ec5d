//! Public display page data
//!
//! Two modes, picked by configuration:
//! - random: one random phrase and one random joke, with fallbacks
//! - today: entries created today (server-local), else the most recent ones

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use quotectl_core::{DisplayConfig, DisplayMode};

use crate::db::{DbError, QuoteStore};
use crate::models::Quote;

/// Longest local-time gap searched when midnight doesn't exist
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Shown when no entry has a phrase
pub const FALLBACK_PHRASE: &str = "The journey of a thousand miles begins with a single step. 🌟";

/// Shown when no entry has a joke
pub const FALLBACK_JOKE: &str =
    "Why don't scientists trust atoms? Because they make up everything! 🔬";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomView {
    pub phrase: String,
    pub joke: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub entries: Vec<Quote>,
    /// Nothing was added today; `entries` are the most recent instead
    pub showing_recent: bool,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayContent {
    Random(RandomView),
    Today(DayView),
}

#[derive(Debug, Clone)]
pub struct DisplayView {
    pub content: DisplayContent,
    /// Footer timestamp
    pub rendered_at: DateTime<Local>,
}

/// Gather everything the public page shows.
pub async fn prepare(
    store: &dyn QuoteStore,
    config: &DisplayConfig,
    now: DateTime<Local>,
) -> Result<DisplayView, DbError> {
    let content = match config.mode {
        DisplayMode::Random => DisplayContent::Random(random(store).await?),
        DisplayMode::Today => {
            DisplayContent::Today(today(store, &Local, now.date_naive(), config.recent_limit).await?)
        }
    };

    Ok(DisplayView {
        content,
        rendered_at: now,
    })
}

async fn random(store: &dyn QuoteStore) -> Result<RandomView, DbError> {
    let phrase = store
        .random_phrase()
        .await?
        .unwrap_or_else(|| FALLBACK_PHRASE.to_owned());
    let joke = store
        .random_joke()
        .await?
        .unwrap_or_else(|| FALLBACK_JOKE.to_owned());
    let total = store.count().await?;

    Ok(RandomView {
        phrase,
        joke,
        total,
    })
}

/// Entries for `date` in `tz`, falling back to the `recent_limit` newest.
pub async fn today<Tz: TimeZone>(
    store: &dyn QuoteStore,
    tz: &Tz,
    date: NaiveDate,
    recent_limit: i64,
) -> Result<DayView, DbError> {
    let (start, end) = day_bounds(tz, date);
    let mut entries = store.list_between(start, end).await?;
    let mut showing_recent = false;

    if entries.is_empty() {
        tracing::debug!(%date, "no entries today, showing recent");
        entries = store.list_recent(recent_limit).await?;
        showing_recent = true;
    }

    let total = store.count().await?;
    Ok(DayView {
        entries,
        showing_recent,
        total,
    })
}

/// UTC instants for the start of `date` and the start of the next day in `tz`.
pub fn day_bounds<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let next = date.succ_opt().unwrap_or(NaiveDate::MAX);
    (
        local_midnight(tz, date.and_time(NaiveTime::MIN)),
        local_midnight(tz, next.and_time(NaiveTime::MIN)),
    )
}

/// First valid instant at or after `naive` in `tz`.
///
/// Midnight can fall in a DST gap (e.g. 00:00 to 01:00); the day then
/// starts at the end of the gap.
fn local_midnight<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    (0..=MAX_GAP_MINUTES)
        .find_map(|minutes| {
            let candidate = naive.checked_add_signed(Duration::minutes(minutes))?;
            tz.from_local_datetime(&candidate).earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}
