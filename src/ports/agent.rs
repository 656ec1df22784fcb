//! Agent port - a player that chooses and applies its own moves

use crate::{
    Result,
    tictactoe::{Board, Player, Position},
};

/// A player bound to one marker for its whole lifetime.
///
/// Agents never act on their own; the match runner hands them the board
/// when it is their turn.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::Agent,
///     tictactoe::{Board, Player, Position},
/// };
///
/// struct FirstEmpty;
///
/// impl Agent for FirstEmpty {
///     fn player(&self) -> Player {
///         Player::X
///     }
///
///     fn choose_move(&mut self, board: &mut Board) -> noughts::Result<Position> {
///         let pos = board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoMovesAvailable { player: Player::X })?;
///         board.place_at(pos, Player::X)?;
///         Ok(pos)
///     }
/// }
///
/// let mut board = Board::new();
/// assert_eq!(FirstEmpty.choose_move(&mut board).unwrap(), Position::new(0, 0));
/// ```
pub trait Agent: Send {
    /// The marker this agent plays.
    fn player(&self) -> Player;

    /// Select a move, place it on `board`, and return the chosen position.
    ///
    /// # Errors
    ///
    /// Returns `NoMovesAvailable` if the board has no empty cell, leaving
    /// the board unchanged.
    fn choose_move(&mut self, board: &mut Board) -> Result<Position>;

    /// Name used in logs.
    fn name(&self) -> &str {
        "agent"
    }
}
