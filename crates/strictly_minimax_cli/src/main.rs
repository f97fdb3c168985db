//! Strictly Minimax - Unified CLI
//!
//! Perfect-play tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_minimax_cli::{Cli, Command, PlayConfig, best, play, selfplay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            human,
            config,
            hints,
        } => run_play(human, config, hints),
        Command::Selfplay => {
            selfplay(std::io::stdout().lock())?;
            Ok(())
        }
        Command::Best { board, json } => {
            best(&board, json, std::io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    human: Option<strictly_minimax::Player>,
    config: Option<std::path::PathBuf>,
    hints: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    }
    .with_overrides(human, hints);

    info!(?config, "Starting play session");
    play(&config, std::io::stdin().lock(), std::io::stdout().lock())?;
    Ok(())
}
