//! Error vocabulary shared by the game core and its callers.

/// Error raised when a move or command cannot be applied.
///
/// Every variant is recoverable: the offending move is rejected
/// without touching board or game state, and the caller decides
/// whether to re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Coordinate outside the board bounds.
    #[display("Point ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length the coordinates were checked against.
        size: usize,
    },

    /// Move targets a cell that already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// Malformed or unrecognized input text.
    #[display("Invalid input")]
    InvalidInput,

    /// Move attempted while no game is accepting moves.
    #[display("Game not started")]
    NotPlaying,

    /// Start requested for a game that is already underway or finished.
    #[display("Game already started")]
    AlreadyStarted,
}

impl std::error::Error for GameError {}
