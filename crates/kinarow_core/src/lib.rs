//! Pure k-in-a-row game logic.
//!
//! A generalized N×N tic-tac-toe for two players: the first to fill a
//! whole row, column, or diagonal segment of length `min(N, 5)` wins.
//!
//! # Architecture
//!
//! - **Board**: square grid of cells, mutated only by placing marks
//! - **Rules**: win-line predicates and draw detection, owned per game
//! - **Engine**: the turn state machine coordinating moves, win/draw
//!   detection, and player alternation
//!
//! All I/O lives in frontend crates; this crate is synchronous, free
//! of globals, and deterministic given the same move sequence.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod engine;
mod error;
mod position;
mod rules;
mod types;

// Crate-level exports - board storage
pub use board::Board;

// Crate-level exports - turn engine
pub use engine::{Game, Phase, TurnOutcome};

// Crate-level exports - errors
pub use error::GameError;

// Crate-level exports - validated coordinates
pub use position::Position;

// Crate-level exports - rules
pub use rules::{WIN_LENGTH, WinChecker, WinRule, is_draw, win_length};

// Crate-level exports - domain types
pub use types::{Cell, Mark, PlayerId};
