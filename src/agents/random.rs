//! Random move agent

use crate::{
    Error, Result,
    adapters::RngPicker,
    ports::{Agent, MovePicker},
    tictactoe::{Board, Player, Position},
};

/// Plays uniformly at random among the empty cells.
///
/// The randomness comes from a [`MovePicker`], so a seeded or scripted
/// picker makes the agent deterministic.
pub struct RandomAgent<P = RngPicker> {
    player: Player,
    picker: P,
    name: String,
}

impl RandomAgent<RngPicker> {
    /// Agent seeded from the process-wide generator
    pub fn new(player: Player) -> Self {
        Self::with_picker(player, RngPicker::new())
    }

    /// Agent with a deterministic seed
    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self::with_picker(player, RngPicker::with_seed(seed))
    }
}

impl<P: MovePicker> RandomAgent<P> {
    pub fn with_picker(player: Player, picker: P) -> Self {
        Self {
            player,
            picker,
            name: format!("Random-{player}"),
        }
    }
}

impl<P: MovePicker> Agent for RandomAgent<P> {
    fn player(&self) -> Player {
        self.player
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<Position> {
        let moves = board.available_moves();
        let position = self
            .picker
            .pick_one(&moves)
            .ok_or(Error::NoMovesAvailable {
                player: self.player,
            })?;
        board.place_at(position, self.player)?;
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    /// Always takes the last candidate
    struct LastPicker;

    impl MovePicker for LastPicker {
        fn pick_one(&mut self, candidates: &[Position]) -> Option<Position> {
            candidates.last().copied()
        }
    }

    fn full_board() -> Board {
        let mut board = Board::new();
        for pos in Board::new().available_moves() {
            let player = if (pos.row + pos.col) % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            board.place_at(pos, player).unwrap();
        }
        board
    }

    #[test]
    fn test_move_uses_picker_and_applies_marker() {
        let mut board = Board::new();
        let mut agent = RandomAgent::with_picker(Player::O, LastPicker);

        let pos = agent.choose_move(&mut board).unwrap();

        assert_eq!(pos, Position::new(2, 2));
        assert_eq!(board.get(2, 2).unwrap(), Cell::O);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_random_move_is_valid() {
        let mut board = Board::new();
        board.place(1, 1, Player::X).unwrap();
        let mut agent = RandomAgent::with_seed(Player::O, 3);

        let pos = agent.choose_move(&mut board).unwrap();

        assert_ne!(pos, Position::new(1, 1));
        assert_eq!(board.get(pos.row, pos.col).unwrap(), Cell::O);
        assert_eq!(board.available_moves().len(), 7);
    }

    #[test]
    fn test_full_board_yields_no_moves_and_no_mutation() {
        let mut board = full_board();
        let before = board.clone();
        let mut agent = RandomAgent::with_seed(Player::X, 0);

        let err = agent.choose_move(&mut board).unwrap_err();

        assert!(matches!(
            err,
            Error::NoMovesAvailable { player: Player::X }
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_player_and_name() {
        let agent = RandomAgent::new(Player::X);
        assert_eq!(agent.player(), Player::X);
        assert_eq!(agent.name(), "Random-X");
    }
}
