//! Draw detection for k-in-a-row.

use crate::board::Board;
use crate::rules::win::WinChecker;
use crate::types::PlayerId;
use strum::IntoEnumIterator;
use tracing::instrument;

/// True when the board is full and neither player completed a line.
#[instrument(skip(board, checker))]
pub fn is_draw(board: &Board, checker: &WinChecker) -> bool {
    board.is_full() && PlayerId::iter().all(|player| !checker.evaluate(board, player.mark()))
}
