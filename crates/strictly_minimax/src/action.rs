//! Actions: the square a player fills on their turn.

use serde::{Deserialize, Serialize};

/// A move target given as `(row, col)`.
///
/// Rows run 0-2 top to bottom and columns 0-2 left to right. Coordinates
/// outside that range are representable so callers can pass untrusted
/// input straight to [`apply`](crate::apply), which rejects them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Action {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates an action from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }

    /// Row-major board index, or `None` when the action is off the board.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then_some(self.row * 3 + self.col)
    }

    /// Checks that both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// All nine actions in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..9).filter_map(Self::from_index)
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
