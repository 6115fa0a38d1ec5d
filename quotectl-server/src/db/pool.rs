//! Database connection pool management
//!
//! One pool is opened at process start and shared by every request.
//! Connecting is eager so a bad host or credentials fail before the
//! server starts listening.

use quotectl_core::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use super::DbError;

/// Build connect options from the resolved configuration.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .database(&config.name)
        .username(&config.username)
        .password(&config.password);

    match config.port {
        Some(port) => options.port(port),
        None => options,
    }
}

/// Open the shared PostgreSQL pool.
///
/// # Errors
///
/// Any failure here is reported as [`DbError::Connection`], whose message
/// reads `Connection failed: <driver message>`.
///
/// # Example
///
/// ```ignore
/// let config = DatabaseConfig::from_env()?;
/// let pool = connect(&config).await?;
/// ```
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options(config))
        .await
        .map_err(DbError::Connection)?;

    tracing::info!(
        host = %config.host,
        database = %config.name,
        max_connections = config.max_connections,
        "Connected to quote store"
    );
    Ok(pool)
}
