//! Line-oriented console adapter around the turn engine.
//!
//! The session is generic over its reader and writer so scripted
//! games run in tests over byte buffers; `main` wires it to stdin
//! and stdout.

use anyhow::{Context, Result};
use kinarow_core::{Game, GameError, Phase, TurnOutcome};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Parsed command token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `s` - start the game.
    Start,
    /// `m` - request a move.
    Move,
    /// `e` or `q` - leave the session.
    Quit,
}

impl Command {
    /// Parses a single command token.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidInput`] for anything outside the
    /// fixed vocabulary.
    pub fn parse(token: &str) -> Result<Self, GameError> {
        match token.trim() {
            "s" => Ok(Command::Start),
            "m" => Ok(Command::Move),
            "e" | "q" => Ok(Command::Quit),
            _ => Err(GameError::InvalidInput),
        }
    }
}

/// Parses a move line in the strict `"x,y"` form: two single digits
/// separated by a comma, no spaces.
///
/// # Errors
///
/// Returns [`GameError::InvalidInput`] for any other shape. Range
/// checking is the engine's job, not the parser's.
pub fn parse_point(line: &str) -> Result<(usize, usize), GameError> {
    let token = line.trim();
    let bytes = token.as_bytes();
    if bytes.len() != 3 || bytes[1] != b',' {
        return Err(GameError::InvalidInput);
    }
    let row = (bytes[0] as char).to_digit(10).ok_or(GameError::InvalidInput)?;
    let col = (bytes[2] as char).to_digit(10).ok_or(GameError::InvalidInput)?;
    Ok((row as usize, col as usize))
}

/// Interactive console session driving one [`Game`].
///
/// Commands map directly to engine transitions; there is no dispatch
/// table to register against.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over an `n`-sized board.
    pub fn new(n: usize, input: R, output: W) -> Self {
        Self {
            input,
            output,
            game: Game::new(n),
        }
    }

    /// Runs the command loop until quit, game end, or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.banner()?;
        loop {
            writeln!(self.output, "Input command:")?;
            let Some(line) = self.read_line()? else {
                debug!("input closed, leaving session");
                break;
            };
            match Command::parse(&line) {
                Ok(Command::Start) => self.handle_start()?,
                Ok(Command::Move) => {
                    if self.handle_move()? {
                        break;
                    }
                }
                Ok(Command::Quit) => {
                    writeln!(self.output, "Game exit!")?;
                    break;
                }
                Err(err) => {
                    warn!(input = line.trim(), "unrecognized command");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
        Ok(())
    }

    fn banner(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to kinarow!")?;
        writeln!(self.output, "Input 's' to start game.")?;
        writeln!(self.output, "Input 'm' to move.")?;
        writeln!(self.output, "Input 'e' or 'q' to exit game.")?;
        Ok(())
    }

    fn handle_start(&mut self) -> Result<()> {
        match self.game.start() {
            Ok(()) => writeln!(self.output, "Game start!")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    /// One move interaction. Returns `true` when the session is over.
    fn handle_move(&mut self) -> Result<bool> {
        if self.game.phase() != Phase::InProgress {
            writeln!(self.output, "{}", GameError::NotPlaying)?;
            return Ok(false);
        }

        write!(self.output, "{}", self.game.board().render())?;
        writeln!(self.output, "Player {}'s turn", self.game.current_player())?;
        writeln!(self.output, "Input point (x,y):")?;
        let Some(line) = self.read_line()? else {
            return Ok(true);
        };

        match parse_point(&line).and_then(|(row, col)| self.game.play(row, col)) {
            Ok(TurnOutcome::Win(player)) => {
                write!(self.output, "{}", self.game.board().render())?;
                writeln!(self.output, "Player {player} win!")?;
                self.finish()
            }
            Ok(TurnOutcome::Draw) => {
                write!(self.output, "{}", self.game.board().render())?;
                writeln!(self.output, "Draw!")?;
                self.finish()
            }
            Ok(TurnOutcome::Continue(_)) => Ok(false),
            Err(err) => {
                debug!(%err, "move rejected");
                writeln!(self.output, "{err}")?;
                writeln!(self.output, "Please input again:")?;
                Ok(false)
            }
        }
    }

    /// Acknowledges the result and closes out the session.
    fn finish(&mut self) -> Result<bool> {
        self.game.acknowledge()?;
        writeln!(self.output, "Game exit!")?;
        Ok(true)
    }

    /// Reads one input line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }
}
