//! Core domain types for tic-tac-toe.

use crate::action::Action;
use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used for this mark in board text.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used for this square in board text.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every successor position is a fresh copy, so
/// a board held by one caller never changes underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

/// Returns the starting board: all nine squares empty.
#[instrument(level = "trace")]
pub fn initial_state() -> Board {
    Board::new()
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows, top to bottom.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            squares[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        Self { squares }
    }

    /// Gets the square at `action`, or `None` if it lies off the board.
    pub fn get(&self, action: Action) -> Option<Square> {
        action.index().map(|i| self.squares[i])
    }

    /// Returns a copy of this board with `square` written at `index`.
    pub(crate) fn with(mut self, index: usize, square: Square) -> Self {
        self.squares[index] = square;
        self
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the board as three rows, top to bottom.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let s = &self.squares;
        [[s[0], s[1], s[2]], [s[3], s[4], s[5]], [s[6], s[7], s[8]]]
    }

    /// Counts the squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Counts the empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}|{}|{}",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine mark characters in row-major order.
    ///
    /// `X`/`O` (any case) are marks and `.`, `-`, `_` are empty squares.
    /// Whitespace and the separators `|` and `/` are ignored, so both
    /// `"XO./.../..."` and the [`Display`](std::fmt::Display) form parse.
    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected character {:?}",
                        other
                    )));
                }
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares.try_into().map_err(|v: Vec<Square>| {
            BoardParseError::new(format!("expected 9 squares, found {}", v.len()))
        })?;
        Ok(Self { squares })
    }
}
