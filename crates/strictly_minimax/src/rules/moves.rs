//! Legal move generation and move application.

use super::turn::turn_owner;
use crate::action::Action;
use crate::error::{IllegalMoveError, IllegalMoveKind};
use crate::types::{Board, Square};
use tracing::instrument;

/// Returns every empty square as an action, in row-major order.
///
/// The order is stable: the search breaks ties between equally good moves
/// by taking the first one listed here. A full board yields no actions.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> Vec<Action> {
    Action::all()
        .filter(|action| board.get(*action) == Some(Square::Empty))
        .collect()
}

/// Returns the board that results from the side to move playing `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`IllegalMoveError`] when `action` is off the board
/// ([`IllegalMoveKind::OutOfBounds`]) or targets a filled square
/// ([`IllegalMoveKind::Occupied`]).
#[instrument(level = "trace", skip(board))]
pub fn apply(board: &Board, action: Action) -> Result<Board, IllegalMoveError> {
    let Some(index) = action.index() else {
        return Err(IllegalMoveError::new(action, IllegalMoveKind::OutOfBounds));
    };

    if board.squares()[index] != Square::Empty {
        return Err(IllegalMoveError::new(action, IllegalMoveKind::Occupied));
    }

    Ok(board.with(index, Square::Occupied(turn_owner(board))))
}
