//! Terminal detection and scoring.

use super::win::winner;
use crate::types::{Board, Player};
use tracing::instrument;

/// Checks if the game is over: someone has won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores a finished board: `1` if X won, `-1` if O won, `0` otherwise.
///
/// Only meaningful on terminal boards; an unfinished board scores `0`.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
