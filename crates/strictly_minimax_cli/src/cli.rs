//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::Player;

/// Strictly Minimax - perfect-play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "minimax")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the engine
    Play {
        /// Mark the human plays (x or o); overrides the config file
        #[arg(long)]
        human: Option<Player>,

        /// Path to an optional TOML play config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Print the square numbering before each prompt
        #[arg(long)]
        hints: bool,
    },

    /// Let the engine play both sides from the empty board
    Selfplay,

    /// Print the optimal move for a board
    Best {
        /// Nine squares in row-major order, e.g. "XX./OO./..."
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
