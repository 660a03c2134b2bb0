//! Game rules for k-in-a-row.
//!
//! Pure values and functions for evaluating board state. Rules are
//! separated from board storage so the engine composes them
//! explicitly instead of reaching for shared registries.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_LENGTH, WinChecker, WinRule, win_length};
