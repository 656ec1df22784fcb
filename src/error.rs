//! Error types for the noughts crate

use thiserror::Error;

use crate::tictactoe::Player;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("position ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("no available moves for player {player}")]
    NoMovesAvailable { player: Player },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "write match output".to_string(),
            source,
        }
    }
}
