//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). None of them mutate their
//! input; [`apply`] hands back a new board instead.

pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use moves::{apply, legal_actions};
pub use terminal::{is_terminal, utility};
pub use turn::turn_owner;
pub use win::winner;
