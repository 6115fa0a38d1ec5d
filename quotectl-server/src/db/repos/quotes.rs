//! Quote repository
//!
//! Every statement binds its values; nothing is interpolated into SQL.
//! Each mutation is a single autocommitted statement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::db::{DbError, QuoteStore};
use crate::models::{EntryId, EntryText, Quote};

/// PostgreSQL-backed quote store
#[derive(Clone)]
pub struct QuoteRepo {
    pool: PgPool,
}

impl QuoteRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn random_column(&self, sql: &str) -> Result<Option<String>, DbError> {
        let row: Option<(String,)> = sqlx::query_as(sql).fetch_optional(&self.pool).await?;
        Ok(row.map(|(text,)| text))
    }
}

#[async_trait]
impl QuoteStore for QuoteRepo {
    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, DbError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quotes")
            .fetch_one(&self.pool)
            .await?;
        Ok(total.0)
    }

    async fn random_phrase(&self) -> Result<Option<String>, DbError> {
        self.random_column(
            "SELECT phrase FROM quotes WHERE phrase IS NOT NULL AND phrase <> '' ORDER BY RANDOM() LIMIT 1",
        )
        .await
    }

    async fn random_joke(&self) -> Result<Option<String>, DbError> {
        self.random_column(
            "SELECT jokes FROM quotes WHERE jokes IS NOT NULL AND jokes <> '' ORDER BY RANDOM() LIMIT 1",
        )
        .await
    }

    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, DbError> {
        let quotes = sqlx::query_as(
            r#"
            SELECT id, phrase, jokes, created_at
            FROM quotes
            WHERE created_at >= $1 AND created_at < $2
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Quote>, DbError> {
        let quotes = sqlx::query_as(
            r#"
            SELECT id, phrase, jokes, created_at
            FROM quotes
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }

    async fn list_all(&self) -> Result<Vec<Quote>, DbError> {
        let quotes = sqlx::query_as(
            r#"
            SELECT id, phrase, jokes, created_at
            FROM quotes
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }

    async fn get(&self, id: EntryId) -> Result<Option<Quote>, DbError> {
        let quote = sqlx::query_as("SELECT id, phrase, jokes, created_at FROM quotes WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        Ok(quote)
    }

    async fn insert(&self, text: &EntryText) -> Result<Quote, DbError> {
        let quote = sqlx::query_as(
            r#"
            INSERT INTO quotes (phrase, jokes, created_at)
            VALUES ($1, $2, NOW())
            RETURNING id, phrase, jokes, created_at
            "#,
        )
        .bind(text.phrase())
        .bind(text.jokes())
        .fetch_one(&self.pool)
        .await?;

        Ok(quote)
    }

    async fn update(&self, id: EntryId, text: &EntryText) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE quotes SET phrase = $1, jokes = $2 WHERE id = $3")
            .bind(text.phrase())
            .bind(text.jokes())
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: EntryId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotectl_core::DatabaseConfig;

    // Integration tests - run with QUOTECTL_DB_* set
    // cargo test -p quotectl-server -- --ignored

    async fn repo() -> QuoteRepo {
        let config = DatabaseConfig::from_env().expect("QUOTECTL_DB_* required");
        let pool = crate::db::connect(&config).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        QuoteRepo::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_get_round_trips() {
        let repo = repo().await;
        let before = Utc::now() - chrono::Duration::seconds(5);

        let text = EntryText::for_create(Some("  Be bold. "), Some("")).unwrap();
        let created = repo.insert(&text).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.phrase.as_deref(), Some("Be bold."));
        assert_eq!(created.jokes, None);
        assert!(created.created_at >= before);

        let id = EntryId::new(created.id).unwrap();
        let fetched = repo.get(id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        repo.delete(id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_keeps_created_at() {
        let repo = repo().await;
        let created = repo
            .insert(&EntryText::for_create(Some("old"), None).unwrap())
            .await
            .unwrap();
        let id = EntryId::new(created.id).unwrap();

        let rows = repo
            .update(id, &EntryText::for_update(Some("new"), Some("joke")))
            .await
            .unwrap();
        assert_eq!(rows, 1);

        let updated = repo.get(id).await.unwrap().unwrap();
        assert_eq!(updated.phrase.as_deref(), Some("new"));
        assert_eq!(updated.jokes.as_deref(), Some("joke"));
        assert_eq!(updated.created_at, created.created_at);

        repo.delete(id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_rows_affect_nothing() {
        let repo = repo().await;
        let id = EntryId::new(i64::MAX).unwrap();

        assert_eq!(repo.update(id, &EntryText::default()).await.unwrap(), 0);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert!(repo.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_removes_exactly_one_row() {
        let repo = repo().await;
        let created = repo
            .insert(&EntryText::for_create(None, Some("knock knock")).unwrap())
            .await
            .unwrap();
        let before = repo.count().await.unwrap();

        let removed = repo.delete(EntryId::new(created.id).unwrap()).await.unwrap();

        assert_eq!(removed, 1);
        assert_eq!(repo.count().await.unwrap(), before - 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn listing_is_newest_first() {
        let repo = repo().await;
        let all = repo.list_all().await.unwrap();

        assert!(all
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }
}
