//! Uniform random move picker

use rand::{Rng, SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};

use crate::{ports::MovePicker, tictactoe::Position};

/// Picks uniformly among the candidates using any [`Rng`].
pub struct RngPicker<R = StdRng> {
    rng: R,
}

impl RngPicker<StdRng> {
    /// Create a picker seeded from the process-wide generator
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a picker with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RngPicker<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RngPicker<R> {
    /// Wrap an existing generator
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> MovePicker for RngPicker<R> {
    fn pick_one(&mut self, candidates: &[Position]) -> Option<Position> {
        candidates.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    #[test]
    fn test_empty_candidates() {
        let mut picker = RngPicker::with_seed(7);
        assert_eq!(picker.pick_one(&[]), None);
    }

    #[test]
    fn test_pick_is_a_candidate() {
        let mut picker = RngPicker::with_seed(42);
        let candidates = Board::new().available_moves();
        for _ in 0..100 {
            let pick = picker.pick_one(&candidates).unwrap();
            assert!(candidates.contains(&pick));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let candidates = Board::new().available_moves();
        let mut a = RngPicker::with_seed(1234);
        let mut b = RngPicker::with_seed(1234);
        for _ in 0..20 {
            assert_eq!(a.pick_one(&candidates), b.pick_one(&candidates));
        }
    }

    #[test]
    fn test_covers_all_candidates() {
        // Uniform over 9 cells: 500 draws hitting every cell is near certain
        let candidates = Board::new().available_moves();
        let mut picker = RngPicker::with_seed(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(picker.pick_one(&candidates).unwrap());
        }
        assert_eq!(seen.len(), candidates.len());
    }

    #[test]
    fn test_single_candidate() {
        let mut picker = RngPicker::new();
        let only = Position::new(2, 2);
        assert_eq!(picker.pick_one(&[only]), Some(only));
    }
}
