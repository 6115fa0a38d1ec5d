//! Schema for the quote store

use sqlx::PgPool;

use super::DbError;

/// Create the `quotes` table and its index if they don't exist
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running quote store migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quotes (
            id BIGSERIAL PRIMARY KEY,
            phrase TEXT,
            jokes TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Listing and the today/recent display both sort on created_at
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_quotes_created ON quotes(created_at DESC, id DESC)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Quote store migrations complete");
    Ok(())
}
