//! Winning line analysis for Tic-Tac-Toe

use super::{Board, Player};

/// Winning line indices on the 3x3 board (row-major)
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Win and draw detection over a [`Board`]. All checks are pure reads.
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(board: &Board, player: Player) -> bool {
        let target = player.to_cell();
        let cells = board.cells();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Full board with no completed line for either player
    pub fn is_draw(board: &Board) -> bool {
        board.is_full() && !Self::has_won(board, Player::X) && !Self::has_won(board, Player::O)
    }

    /// The first player found holding a completed line, X checked first
    pub fn winner(board: &Board) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| Self::has_won(board, player))
    }
}
