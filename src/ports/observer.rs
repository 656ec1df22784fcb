//! Observer port - sink for match events
//!
//! The runner reports every step of a match here. Rendering to a terminal
//! is one adapter; tests record events instead.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Player, Position},
};

/// Observer trait for monitoring a match
///
/// # Event Sequence
///
/// 1. `on_match_start(game_num, board)` - Once per match, with the empty board
/// 2. For each turn:
///    - `on_turn(player)` - Before the agent is asked for a move
///    - `on_move(player, position, board)` - After the move is applied
/// 3. Exactly one of:
///    - `on_match_end(game_num, outcome)` - On a win or draw
///    - `on_error(message)` - If the match halted abnormally
///
/// Every method defaults to a no-op.
pub trait Observer: Send {
    fn on_match_start(&mut self, _game_num: usize, _board: &Board) -> Result<()> {
        Ok(())
    }

    fn on_turn(&mut self, _player: Player) -> Result<()> {
        Ok(())
    }

    /// Called after `player` placed a marker at `position`; `board` already
    /// contains it and the runner has already moved on to the next turn.
    fn on_move(&mut self, _player: Player, _position: Position, _board: &Board) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn on_error(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
}
