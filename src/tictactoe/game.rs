//! Match state and records

use std::fmt;

use super::board::{Board, Player, Position};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl fmt::Display for GameOutcome {
    /// The end-of-game banner
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "PLAYER {player} WON!"),
            GameOutcome::Draw => f.write_str("GAME DRAW!"),
        }
    }
}

/// State of a running match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl MatchStatus {
    /// Status after `mover` has just played on `board`.
    ///
    /// Only the mover can have completed a line with the last move, so the
    /// opponent is not checked.
    pub fn after_move(board: &Board, mover: Player) -> Self {
        if board.has_won(mover) {
            MatchStatus::Won(mover)
        } else if board.is_draw() {
            MatchStatus::Draw
        } else {
            MatchStatus::InProgress
        }
    }

    pub fn is_terminal(self) -> bool {
        self != MatchStatus::InProgress
    }

    /// The final outcome, if the match is over
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::Won(player) => Some(GameOutcome::Win(player)),
            MatchStatus::Draw => Some(GameOutcome::Draw),
        }
    }
}

/// A completed match with its move history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
    pub board: Board,
}

impl GameRecord {
    /// Number of moves played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
