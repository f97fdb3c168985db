//! Properties of the rule engine checked over every reachable position.

use std::collections::HashSet;
use strictly_minimax::{
    Action, Board, Player, Square, apply, initial_state, is_terminal, legal_actions, turn_owner,
    utility, winner,
};

/// Walks every position reachable by legal play, stopping at terminal boards.
fn reachable_positions() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) || is_terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            stack.push(apply(&board, action).unwrap());
        }
    }
    seen
}

fn has_line(board: &Board, player: Player) -> bool {
    const LINES: [[usize; 3]; 8] = [
        [0, 1, 2], [3, 4, 5], [6, 7, 8],
        [0, 3, 6], [1, 4, 7], [2, 5, 8],
        [0, 4, 8], [2, 4, 6],
    ];
    let squares = board.squares();
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(player)))
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable_positions().len(), 5478);
}

#[test]
fn test_mark_counts_alternate() {
    for board in reachable_positions() {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        assert!(x == o || x == o + 1, "bad counts on\n{board}");
    }
}

#[test]
fn test_initial_state() {
    let board = initial_state();
    assert_eq!(board.empty_count(), 9);
    assert_eq!(turn_owner(&board), Player::X);
    assert_eq!(legal_actions(&board).len(), 9);
}

#[test]
fn test_apply_changes_exactly_one_square() {
    for board in reachable_positions() {
        let snapshot = board;
        let mover = Square::Occupied(turn_owner(&board));
        for action in legal_actions(&board) {
            let next = apply(&board, action).unwrap();
            let index = action.index().unwrap();
            for i in 0..9 {
                if i == index {
                    assert_eq!(next.squares()[i], mover);
                } else {
                    assert_eq!(next.squares()[i], board.squares()[i]);
                }
            }
        }
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_at_most_one_winner() {
    for board in reachable_positions() {
        assert!(!(has_line(&board, Player::X) && has_line(&board, Player::O)));
        match winner(&board) {
            Some(player) => assert!(has_line(&board, player)),
            None => {
                assert!(!has_line(&board, Player::X));
                assert!(!has_line(&board, Player::O));
            }
        }
    }
}

#[test]
fn test_terminal_iff_winner_or_full() {
    for board in reachable_positions() {
        assert_eq!(
            is_terminal(&board),
            winner(&board).is_some() || legal_actions(&board).is_empty()
        );
    }
}

#[test]
fn test_utility_agrees_with_winner() {
    for board in reachable_positions().iter().filter(|b| is_terminal(b)) {
        let expected = match winner(board) {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        };
        assert_eq!(utility(board), expected);
    }
}

#[test]
fn test_legal_actions_scenario() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let actions: HashSet<Action> = legal_actions(&board).into_iter().collect();
    let expected: HashSet<Action> = [(0, 2), (1, 2), (2, 0), (2, 1), (2, 2)]
        .into_iter()
        .map(Action::from)
        .collect();
    assert_eq!(actions, expected);
}

#[test]
fn test_full_board_draw_scenario() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(winner(&board), None);
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), 0);
    for action in Action::all() {
        assert!(apply(&board, action).is_err());
    }
}
