//! Exhaustive minimax search.
//!
//! X maximizes [`utility`], O minimizes it. Every call searches the whole
//! remaining game tree down to terminal positions; there is no pruning and
//! nothing is cached between calls. At most nine plies remain from any
//! position, so each branch holds only a handful of board copies.

use crate::action::Action;
use crate::rules::{apply, is_terminal, legal_actions, turn_owner, utility};
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Game-theoretic value of a position: `1` X wins, `0` draw, `-1` O wins.
pub type Value = i8;

/// Every legal action paired with the board it produces, in row-major order.
fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    legal_actions(board)
        .into_iter()
        .filter_map(move |action| apply(board, action).ok().map(|next| (action, next)))
}

/// Value of `board` when X (the maximizer) is to move.
pub fn max_value(board: &Board) -> Value {
    if is_terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| min_value(&next))
        .max()
        .unwrap_or_else(|| utility(board))
}

/// Value of `board` when O (the minimizer) is to move.
pub fn min_value(board: &Board) -> Value {
    if is_terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| max_value(&next))
        .min()
        .unwrap_or_else(|| utility(board))
}

/// Value of `board` under optimal play by both sides from here.
#[instrument(skip(board))]
pub fn game_value(board: &Board) -> Value {
    match turn_owner(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Best action for the side to move together with the value it secures.
///
/// Returns `None` on a terminal board. Among equally valued actions the
/// first in row-major order wins.
#[instrument(skip(board))]
pub fn optimal_move_with_value(board: &Board) -> Option<(Action, Value)> {
    if is_terminal(board) {
        debug!("Board is terminal, no move to make");
        return None;
    }

    let player = turn_owner(board);
    let mut best: Option<(Action, Value)> = None;

    for (action, next) in successors(board) {
        let value = match player {
            Player::X => min_value(&next),
            Player::O => max_value(&next),
        };
        let improves = match best {
            None => true,
            Some((_, current)) => match player {
                Player::X => value > current,
                Player::O => value < current,
            },
        };
        if improves {
            best = Some((action, value));
        }
    }

    if let Some((action, value)) = best {
        debug!(%player, %action, value, "Chose optimal move");
    }
    best
}

/// Returns the optimal action for the side to move, or `None` if the game
/// is already over.
pub fn optimal_move(board: &Board) -> Option<Action> {
    optimal_move_with_value(board).map(|(action, _)| action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        assert_eq!(optimal_move(&board("XXX/OO./...")), None);
        assert_eq!(optimal_move(&board("XOX/XOO/OXX")), None);
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let b = board("XX./OO./...");
        assert_eq!(optimal_move_with_value(&b), Some((Action::new(0, 2), 1)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let b = board("XX./OO./X..");
        assert_eq!(optimal_move_with_value(&b), Some((Action::new(1, 2), -1)));
    }

    #[test]
    fn test_o_blocks_threat() {
        let b = board("XX./.O./...");
        assert_eq!(optimal_move(&b), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_x_blocks_threat() {
        let b = board("OO./X../..X");
        assert_eq!(optimal_move(&b), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_values_on_terminal_boards() {
        assert_eq!(max_value(&board("XXX/OO./...")), 1);
        assert_eq!(min_value(&board("XXX/OO./...")), 1);
        assert_eq!(max_value(&board("XOX/XOO/OXX")), 0);
    }

    #[test]
    fn test_forced_win_is_found() {
        // (0, 1) forks the middle column and the diagonal; it also comes
        // before the immediate win at (2, 2), so it is the one returned.
        let b = board("X.O/.X./O..");
        assert_eq!(turn_owner(&b), Player::X);
        assert_eq!(game_value(&b), 1);
        assert_eq!(optimal_move_with_value(&b), Some((Action::new(0, 1), 1)));
    }

    #[test]
    fn test_last_square_is_the_only_move() {
        let b = board("XOX/XOO/OX.");
        assert_eq!(optimal_move(&b), Some(Action::new(2, 2)));
        assert_eq!(game_value(&b), 0);
    }
}
