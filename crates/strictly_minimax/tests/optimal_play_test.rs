//! End-to-end checks of the minimax search.

use strictly_minimax::{
    Action, Board, Game, GameStatus, Player, apply, game_value, initial_state, is_terminal,
    legal_actions, optimal_move, turn_owner, utility,
};

#[test]
fn test_self_play_from_start_is_a_draw() {
    let mut game = Game::new();
    assert_eq!(game.play_optimally().unwrap(), GameStatus::Draw);
    assert_eq!(game.history().len(), 9);
    assert_eq!(utility(game.board()), 0);
}

#[test]
fn test_every_opening_is_a_draw() {
    let start = initial_state();
    for action in legal_actions(&start) {
        let board = apply(&start, action).unwrap();
        assert_eq!(game_value(&board), 0, "opening {action}");
    }
}

#[test]
fn test_self_play_is_reproducible() {
    let mut first = Game::new();
    let mut second = Game::new();
    first.play_optimally().unwrap();
    second.play_optimally().unwrap();
    assert_eq!(first.history(), second.history());
}

#[test]
fn test_winning_move_scenario() {
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(turn_owner(&board), Player::X);
    assert_eq!(optimal_move(&board), Some(Action::new(0, 2)));
}

/// Plays `engine` with the search against every possible line of the
/// opponent, returning the worst outcome for the engine seen on any line.
fn worst_outcome(board: &Board, engine: Player) -> i8 {
    if is_terminal(board) {
        let value = utility(board);
        return if engine == Player::X { value } else { -value };
    }
    if turn_owner(board) == engine {
        let action = optimal_move(board).unwrap();
        worst_outcome(&apply(board, action).unwrap(), engine)
    } else {
        legal_actions(board)
            .into_iter()
            .map(|action| worst_outcome(&apply(board, action).unwrap(), engine))
            .min()
            .unwrap()
    }
}

#[test]
fn test_engine_never_loses_as_o() {
    assert!(worst_outcome(&initial_state(), Player::O) >= 0);
}

#[test]
fn test_engine_never_loses_as_x() {
    assert!(worst_outcome(&initial_state(), Player::X) >= 0);
}

#[test]
fn test_engine_punishes_blunder() {
    // O answered a corner opening with an edge; X can force a win.
    let mut game = Game::new();
    game.play(Action::new(0, 0)).unwrap();
    game.play(Action::new(0, 1)).unwrap();
    assert_eq!(game_value(game.board()), 1);
    assert_eq!(game.play_optimally().unwrap(), GameStatus::Won(Player::X));
}
