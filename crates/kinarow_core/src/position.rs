//! Validated board coordinates.

use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// A (row, column) pair checked against a board size at construction.
///
/// Both coordinates are in `[0, n)` for the `n` given to
/// [`Position::new`], and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position on an `n`-sized board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if either coordinate is `n`
    /// or larger.
    pub fn new(row: usize, col: usize, n: usize) -> Result<Self, GameError> {
        if row >= n || col >= n {
            return Err(GameError::OutOfRange { row, col, size: n });
        }
        Ok(Self { row, col })
    }

    /// Row coordinate.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column coordinate.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
