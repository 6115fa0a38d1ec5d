//! quotectl CLI - daily phrase and joke site
//!
//! - `serve`: run the public page and the manage page
//! - `migrate`: create the quote table
//! - `config`: inspect configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "quotectl",
    author,
    version,
    about = "Serve a daily phrase and joke, with a page to manage them",
    long_about = "Public page with a random (or today's) phrase and joke, plus a manage page \
                  to add, edit and delete entries stored in PostgreSQL."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.quotectl/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "QUOTECTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (public page and manage page)
    Serve(commands::serve::ServeArgs),
    /// Create the quote table and index if missing
    Migrate,
    /// Inspect quotectl configuration (path, show)
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env in the working directory; real environment wins
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config_path).await?,
        Commands::Migrate => commands::run_migrate(config_path).await?,
        Commands::Config(args) => commands::run_config(args, config_path)?,
    }

    Ok(())
}
