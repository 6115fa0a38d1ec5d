//! HTTP server command
//!
//! Resolves configuration, opens the quote store and runs the server
//! until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use quotectl_core::{DisplayMode, QuoteConfig};
use quotectl_server::db::migrations;
use quotectl_server::{connect, run_server, AppState, QuoteRepo, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: [server].bind, else 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Public page mode: random or today (default: [display].mode)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<DisplayMode>,

    /// Do not create the quote table on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = QuoteConfig::load(config_path).context("Failed to load config")?;
    let db_config = config.database()?;

    let mut display = config.display;
    if let Some(mode) = args.mode {
        display.mode = mode;
    }
    let server = ServerConfig {
        bind_addr: args.bind.unwrap_or(config.server.bind),
    };

    tracing::info!(
        host = %db_config.host,
        database = %db_config.name,
        "Connecting to quote store"
    );

    // Fail fast: a server that can't reach its store has nothing to show
    let pool = connect(&db_config).await?;

    if args.skip_migrations {
        tracing::info!("Skipping migrations");
    } else {
        migrations::run(&pool).await?;
    }

    let state = AppState::new(Arc::new(QuoteRepo::new(pool)), display);

    // Run server (blocks until shutdown)
    run_server(state, server).await.context("Server error")?;

    Ok(())
}
