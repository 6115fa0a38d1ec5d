//! Schema setup command

use std::path::Path;

use anyhow::{Context, Result};
use quotectl_core::QuoteConfig;
use quotectl_server::connect;
use quotectl_server::db::migrations;

/// Create the quote table and index, then exit
pub async fn run_migrate(config_path: Option<&Path>) -> Result<()> {
    let config = QuoteConfig::load(config_path).context("Failed to load config")?;
    let db_config = config.database()?;

    let pool = connect(&db_config).await?;
    migrations::run(&pool).await?;
    pool.close().await;

    println!("✅ Quote store ready on {}/{}", db_config.host, db_config.name);
    Ok(())
}
