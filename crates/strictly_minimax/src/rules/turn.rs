//! Turn order.

use crate::types::{Board, Player};
use tracing::instrument;

/// Returns the player who moves next on `board`.
///
/// X moves first and the marks alternate, so whoever has placed fewer marks
/// is to move. Equal counts (including the empty board) mean X.
#[instrument(level = "trace", skip(board))]
pub fn turn_owner(board: &Board) -> Player {
    if board.count(Player::O) < board.count(Player::X) {
        Player::O
    } else {
        Player::X
    }
}
