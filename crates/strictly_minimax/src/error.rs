//! Error types for the rule engine.

use crate::action::Action;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum IllegalMoveKind {
    /// The coordinates lie outside the 3x3 grid.
    #[display("coordinates are off the board")]
    OutOfBounds,
    /// The target square already holds a mark.
    #[display("square is already occupied")]
    Occupied,
    /// The game has already been decided.
    #[display("game is already over")]
    GameOver,
}

/// A move that is not in the current set of legal actions.
#[derive(Debug, Clone, Display, Error)]
#[display("Illegal move {}: {} at {}:{}", action, kind, file, line)]
pub struct IllegalMoveError {
    /// The rejected action.
    pub action: Action,
    /// Why it was rejected.
    pub kind: IllegalMoveKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl IllegalMoveError {
    /// Creates a new illegal move error with caller location tracking.
    #[track_caller]
    #[instrument(level = "debug")]
    pub fn new(action: Action, kind: IllegalMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            action,
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Board text that could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
