//! Tic-tac-toe - two players, one terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe::{Cli, GameConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli)?;

    init_tracing(config.log_file(), config.log_filter())?;
    info!(?config, "Configuration resolved");

    run_tui(&config)
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_tracing(log_file: &Path, default_filter: &str) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
