//! Strictly Minimax - perfect-play tic-tac-toe
//!
//! Pure game logic with no I/O: board values, the rules of the game, and an
//! exhaustive minimax search that finds the optimal move for either side.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`] and [`Action`]
//! - **Rules**: [`turn_owner`], [`legal_actions`], [`apply`], [`winner`],
//!   [`is_terminal`], [`utility`]
//! - **Search**: [`optimal_move`], [`max_value`], [`min_value`]
//! - **Game**: [`Game`], a board with its move history
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, apply, initial_state, optimal_move};
//!
//! let board = initial_state();
//! let board = apply(&board, Action::new(1, 1))?;
//! let reply = optimal_move(&board).expect("game is not over");
//! assert!(apply(&board, reply).is_ok());
//! # Ok::<(), strictly_minimax::IllegalMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod error;
mod game;
mod rules;
mod search;
mod types;

// Crate-level exports - Types
pub use action::Action;
pub use types::{Board, Player, Square, initial_state};

// Crate-level exports - Errors
pub use error::{BoardParseError, IllegalMoveError, IllegalMoveKind};

// Crate-level exports - Rules
pub use rules::{apply, is_terminal, legal_actions, turn_owner, utility, winner};

// Crate-level exports - Search
pub use search::{Value, game_value, max_value, min_value, optimal_move, optimal_move_with_value};

// Crate-level exports - Game driver
pub use game::{Game, GameStatus};
