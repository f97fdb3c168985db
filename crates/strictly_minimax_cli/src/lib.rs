//! Terminal host for the strictly_minimax engine.
//!
//! Owns everything the engine leaves out: argument parsing, play config,
//! text rendering and the interactive game loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use session::{Analysis, best, parse_move, play, selfplay};
