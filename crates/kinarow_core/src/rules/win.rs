//! Win detection: candidate lines and their evaluation.

use crate::board::Board;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of consecutive same-mark cells required to win, capped at
/// the board size.
pub const WIN_LENGTH: usize = 5;

/// Effective win length for an `n`-sized board: `min(n, WIN_LENGTH)`.
///
/// On a 3x3 board this collapses to 3, i.e. classic tic-tac-toe.
pub fn win_length(n: usize) -> usize {
    n.min(WIN_LENGTH)
}

/// One candidate winning line.
///
/// Each variant names a line on the board; the rule tests the first
/// `win_length(n)` cells of that line. Every line is anchored at its
/// origin: a row rule always tests columns `0..k`, a column rule rows
/// `0..k`, and the diagonals start in their corners. On boards wider
/// than [`WIN_LENGTH`], a run that starts mid-line therefore goes
/// undetected.
///
/// Rules are stateless values, evaluated against one mark at a time,
/// so a single set serves both players for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinRule {
    /// Left-anchored segment of the given row.
    Row(usize),
    /// Top-anchored segment of the given column.
    Column(usize),
    /// Top-left corner towards bottom-right.
    MainDiagonal,
    /// Top-right corner towards bottom-left.
    AntiDiagonal,
}

impl WinRule {
    /// Coordinates tested by this rule on an `n`-sized board.
    fn cells(self, n: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..win_length(n)).map(move |i| match self {
            WinRule::Row(r) => (r, i),
            WinRule::Column(c) => (i, c),
            WinRule::MainDiagonal => (i, i),
            WinRule::AntiDiagonal => (i, n - 1 - i),
        })
    }

    /// True when every cell of the line holds `mark`.
    pub fn is_satisfied(self, board: &Board, mark: Mark) -> bool {
        self.cells(board.size())
            .all(|(row, col)| board.cell_at(row, col) == Some(Cell::Taken(mark)))
    }
}

/// The full rule set for one board size.
///
/// Built once per game and owned by the game instance; evaluation
/// ORs the individual rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinChecker {
    rules: Vec<WinRule>,
}

impl WinChecker {
    /// Builds the `2n + 2` rules for an `n`-sized board: one per row,
    /// one per column, and the two corner diagonals.
    pub fn new(n: usize) -> Self {
        let mut rules = Vec::with_capacity(2 * n + 2);
        for i in 0..n {
            rules.push(WinRule::Row(i));
            rules.push(WinRule::Column(i));
        }
        rules.push(WinRule::MainDiagonal);
        rules.push(WinRule::AntiDiagonal);
        Self { rules }
    }

    /// True when any rule in the set is satisfied for `mark`.
    #[instrument(skip(self, board))]
    pub fn evaluate(&self, board: &Board, mark: Mark) -> bool {
        self.rules.iter().any(|rule| rule.is_satisfied(board, mark))
    }

    /// The rules in the set.
    pub fn rules(&self) -> &[WinRule] {
        &self.rules
    }
}
