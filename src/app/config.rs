//! Configuration types for running matches.

use std::time::Duration;

use crate::{
    Error, Result,
    agents::RandomAgent,
    tictactoe::Player,
};

/// Pause before each move so a human can follow the game
pub const DEFAULT_MOVE_DELAY: Duration = Duration::from_secs(1);

/// Configuration for one or more bot-vs-bot matches.
///
/// The pacing delay only affects presentation; it never changes which
/// moves are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Base random seed (None = non-deterministic)
    pub seed: Option<u64>,
    /// Delay before each move is requested
    pub move_delay: Duration,
    /// Number of matches to play
    pub games: usize,
}

impl MatchConfig {
    /// Defaults: no seed, one second pacing, a single game.
    pub fn new() -> Self {
        Self {
            seed: None,
            move_delay: DEFAULT_MOVE_DELAY,
            games: 1,
        }
    }

    /// Configuration for tests and batch runs: no pacing delay.
    pub fn headless() -> Self {
        Self::new().with_move_delay(Duration::ZERO)
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_move_delay(mut self, delay: Duration) -> Self {
        self.move_delay = delay;
        self
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if fewer than one game is requested.
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "at least one game must be played".to_string(),
            });
        }
        Ok(())
    }

    /// Seeds for X and O in game `game_num`: `base + 2n` and `base + 2n + 1`.
    pub fn seeds_for_game(&self, game_num: usize) -> Option<(u64, u64)> {
        self.seed.map(|base| {
            let x_seed = base.wrapping_add((game_num as u64).wrapping_mul(2));
            (x_seed, x_seed.wrapping_add(1))
        })
    }

    /// Build the two random agents for game `game_num`.
    pub fn create_agents(&self, game_num: usize) -> (RandomAgent, RandomAgent) {
        match self.seeds_for_game(game_num) {
            Some((x_seed, o_seed)) => (
                RandomAgent::with_seed(Player::X, x_seed),
                RandomAgent::with_seed(Player::O, o_seed),
            ),
            None => (RandomAgent::new(Player::X), RandomAgent::new(Player::O)),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
