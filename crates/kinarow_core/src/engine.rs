//! Turn engine: the state machine driving play to a win or draw.

use crate::board::Board;
use crate::error::GameError;
use crate::position::Position;
use crate::rules::WinChecker;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Game phase.
///
/// Transitions happen only through [`Game`] operations:
/// `NotStarted -> InProgress` via [`Game::start`],
/// `InProgress -> Won | Draw` via [`Game::play`], and
/// `Won | Draw -> Ended` via [`Game::acknowledge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the start command.
    NotStarted,
    /// Accepting moves.
    InProgress,
    /// A player completed a line. Terminal apart from acknowledgement.
    Won(PlayerId),
    /// Board filled with no winner. Terminal apart from acknowledgement.
    Draw,
    /// Result acknowledged; the game value is spent.
    Ended,
}

/// What a successfully applied move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play continues; the returned player moves next.
    Continue(PlayerId),
    /// The moving player completed a line.
    Win(PlayerId),
    /// The board filled with no winner.
    Draw,
}

/// Two-player turn engine over one board.
///
/// Each game value owns its board and rule set outright, so
/// independent games never share state. Turn order alternates
/// strictly starting with player 1; rejected moves do not advance
/// the turn.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    checker: WinChecker,
    current: PlayerId,
    phase: Phase,
}

impl Game {
    /// Creates a game over an empty `n`-sized board, not yet started.
    #[instrument]
    pub fn new(n: usize) -> Self {
        Self {
            board: Board::new(n),
            checker: WinChecker::new(n),
            current: PlayerId::One,
            phase: Phase::NotStarted,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Starts the game; player 1 moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyStarted`] unless the phase is
    /// [`Phase::NotStarted`].
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        self.phase = Phase::InProgress;
        info!(size = self.board.size(), "game started");
        Ok(())
    }

    /// Applies the current player's mark at `(row, col)`.
    ///
    /// Validation precedes mutation: a rejected move leaves the
    /// board, the phase, and the turn untouched, and the caller may
    /// retry.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotPlaying`] if the game is not in progress.
    /// - [`GameError::OutOfRange`] if either coordinate is off the board.
    /// - [`GameError::Occupied`] if the target cell already holds a mark.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<TurnOutcome, GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::NotPlaying);
        }

        let pos = Position::new(row, col, self.board.size())?;
        let mover = self.current;
        self.board.place(pos, mover.mark())?;
        debug!(player = mover.ordinal(), row, col, "mark placed");

        if self.checker.evaluate(&self.board, mover.mark()) {
            self.phase = Phase::Won(mover);
            info!(player = mover.ordinal(), "game won");
            return Ok(TurnOutcome::Win(mover));
        }

        if self.board.is_full() {
            self.phase = Phase::Draw;
            info!("game drawn");
            return Ok(TurnOutcome::Draw);
        }

        self.current = mover.opponent();
        Ok(TurnOutcome::Continue(self.current))
    }

    /// Acknowledges a finished game, spending the value.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotPlaying`] unless the phase is
    /// [`Phase::Won`] or [`Phase::Draw`].
    #[instrument(skip(self))]
    pub fn acknowledge(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Won(_) | Phase::Draw => {
                self.phase = Phase::Ended;
                debug!("game acknowledged");
                Ok(())
            }
            _ => Err(GameError::NotPlaying),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_only_from_not_started() {
        let mut game = Game::new(3);
        assert!(game.start().is_ok());
        assert_eq!(game.start(), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn test_acknowledge_requires_finished_game() {
        let mut game = Game::new(3);
        assert_eq!(game.acknowledge(), Err(GameError::NotPlaying));
        game.start().expect("fresh game starts");
        assert_eq!(game.acknowledge(), Err(GameError::NotPlaying));
    }

    #[test]
    fn test_turn_switches_after_move() {
        let mut game = Game::new(3);
        game.start().expect("fresh game starts");
        assert_eq!(game.current_player(), PlayerId::One);
        assert_eq!(game.play(0, 0), Ok(TurnOutcome::Continue(PlayerId::Two)));
        assert_eq!(game.current_player(), PlayerId::Two);
    }
}
