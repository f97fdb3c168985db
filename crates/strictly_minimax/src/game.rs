//! Game driver: a board plus the moves that led to it.

use crate::action::Action;
use crate::error::{IllegalMoveError, IllegalMoveKind};
use crate::rules::{apply, is_terminal, turn_owner, winner};
use crate::search::optimal_move;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Derives the status of `board` from the rules.
    pub fn of(board: &Board) -> Self {
        match winner(board) {
            Some(player) => GameStatus::Won(player),
            None if is_terminal(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

/// A game in progress or finished, with its move history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: Vec<Action>,
}

impl Game {
    /// Creates a new game at the initial position.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game that starts from an arbitrary board.
    #[instrument(level = "debug")]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the actions played so far.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        turn_owner(&self.board)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Plays `action` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] with [`IllegalMoveKind::GameOver`] once
    /// the game is decided, and whatever [`apply`] rejects otherwise.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play(&mut self, action: Action) -> Result<GameStatus, IllegalMoveError> {
        if is_terminal(&self.board) {
            return Err(IllegalMoveError::new(action, IllegalMoveKind::GameOver));
        }

        self.board = apply(&self.board, action)?;
        self.history.push(action);

        let status = self.status();
        debug!(?status, "Move applied");
        Ok(status)
    }

    /// Lets the search play both sides until the game ends.
    #[instrument(skip(self))]
    pub fn play_optimally(&mut self) -> Result<GameStatus, IllegalMoveError> {
        while let Some(action) = optimal_move(&self.board) {
            self.play(action)?;
        }
        let status = self.status();
        info!(?status, moves = self.history.len(), "Game finished");
        Ok(status)
    }
}
