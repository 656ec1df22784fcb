//! Text observer - prints the match transcript

use std::io::{self, Write};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, Player, Position},
};

/// Writes the board after every move and the end-of-game banner.
///
/// Output for one match:
///
/// ```text
/// Starting Tic-Tac-Toe Bot vs Bot game:
///
/// Initial board:
/// <board>
///
/// Player X:
/// <board>
/// ...
///
/// PLAYER X WON!
/// ```
pub struct ConsoleObserver<W = io::Stdout> {
    out: W,
}

impl ConsoleObserver<io::Stdout> {
    /// Observer printing to standard output
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Observer for ConsoleObserver<W> {
    fn on_match_start(&mut self, _game_num: usize, board: &Board) -> Result<()> {
        writeln!(self.out, "Starting Tic-Tac-Toe Bot vs Bot game:")?;
        writeln!(self.out, "\nInitial board:")?;
        writeln!(self.out, "{board}")?;
        self.out.flush()?;
        Ok(())
    }

    fn on_turn(&mut self, player: Player) -> Result<()> {
        writeln!(self.out, "\nPlayer {player}:")?;
        self.out.flush()?;
        Ok(())
    }

    fn on_move(&mut self, _player: Player, _position: Position, board: &Board) -> Result<()> {
        writeln!(self.out, "{board}")?;
        self.out.flush()?;
        Ok(())
    }

    fn on_match_end(&mut self, _game_num: usize, outcome: GameOutcome) -> Result<()> {
        writeln!(self.out, "\n{outcome}")?;
        self.out.flush()?;
        Ok(())
    }

    fn on_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "Error: {message}")?;
        self.out.flush()?;
        Ok(())
    }
}
