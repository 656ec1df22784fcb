//! Move picker port - the source of randomness for move selection

use crate::tictactoe::Position;

/// Chooses one candidate out of a non-empty set.
///
/// Production code plugs in a uniform random generator; tests plug in a
/// scripted picker so matches are reproducible.
pub trait MovePicker: Send {
    /// Pick one of `candidates`, or `None` when the slice is empty.
    fn pick_one(&mut self, candidates: &[Position]) -> Option<Position>;
}
