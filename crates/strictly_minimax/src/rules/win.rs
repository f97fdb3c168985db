//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines as row-major indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line found holding three of the
/// same mark, `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(player)
        }
        _ => None,
    })
}
