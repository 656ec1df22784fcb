//! Back-to-back matches with an outcome tally

use std::fmt;

use super::runner::MatchRunner;
use crate::{
    Result,
    app::MatchConfig,
    ports::Observer,
    tictactoe::{GameOutcome, Player},
};

/// Outcome counts over a series of matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesSummary {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SeriesSummary {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {} ({} games)",
            self.x_wins,
            self.o_wins,
            self.draws,
            self.total()
        )
    }
}

/// Plays `config.games` matches, each on a fresh board with fresh agents.
pub struct SeriesRunner {
    config: MatchConfig,
}

impl SeriesRunner {
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the config does not validate.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run every match in order, stopping at the first error.
    pub fn run(&self, observer: &mut dyn Observer) -> Result<SeriesSummary> {
        let mut summary = SeriesSummary::default();
        tracing::info!(
            games = self.config.games,
            seed = ?self.config.seed,
            "starting series"
        );

        for game_num in 0..self.config.games {
            let (agent_x, agent_o) = self.config.create_agents(game_num);
            let record = MatchRunner::new(Box::new(agent_x), Box::new(agent_o))?
                .with_move_delay(self.config.move_delay)
                .with_game_num(game_num)
                .run(observer)?;
            summary.record(record.outcome);
        }

        tracing::info!("series finished: {summary}");
        Ok(summary)
    }
}
