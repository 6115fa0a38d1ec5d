use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quotectl_core::QuoteConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective config as TOML (password masked)
    Show,
}

pub fn run_config(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(config_path),
        ConfigCommands::Show => run_show(config_path),
    }
}

fn run_path(config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(QuoteConfig::config_path);

    println!("{}", path.display());
    if !path.exists() {
        println!("   ⚠ file does not exist (defaults and environment apply)");
    }
    Ok(())
}

fn run_show(config_path: Option<&Path>) -> Result<()> {
    let config = QuoteConfig::load(config_path).context("Failed to load config")?;
    print!("{}", config.redacted().to_toml_string()?);

    // Environment overrides aren't in the file; report what actually resolves
    match config.database() {
        Ok(db) => println!(
            "\n# resolved database: {}@{}/{}",
            db.username, db.host, db.name
        ),
        Err(e) => println!("\n# database not resolvable: {}", e),
    }
    Ok(())
}
