//! Core domain types for k-in-a-row.

use serde::{Deserialize, Serialize};

/// The symbol a player stamps into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Cross, played by the first player.
    X,
    /// Nought, played by the second player.
    O,
}

impl Mark {
    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the two players, identified by ordinal.
///
/// Equality is by ordinal; the mark assignment is fixed for the
/// lifetime of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum PlayerId {
    /// First player. Goes first, plays `X`.
    One,
    /// Second player. Plays `O`.
    Two,
}

impl PlayerId {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// The mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            PlayerId::One => Mark::X,
            PlayerId::Two => Mark::O,
        }
    }

    /// Ordinal for display (1 or 2).
    pub fn ordinal(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

/// A cell on the board.
///
/// A cell transitions from `Empty` to `Taken` at most once; nothing
/// clears or overwrites a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell claimed by a mark.
    Taken(Mark),
}
