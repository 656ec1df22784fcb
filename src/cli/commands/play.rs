//! Play command - random bot vs random bot

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::ConsoleObserver,
    app::MatchConfig,
    cli::{logging, output},
    pipeline::SeriesRunner,
};

#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(version, about = "Watch two random bots play Tic-Tac-Toe", long_about = None)]
pub struct PlayArgs {
    /// Random seed for reproducibility (X uses seed, O uses seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before each move, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Number of games to play back to back
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl PlayArgs {
    pub fn to_config(&self) -> MatchConfig {
        let mut config = MatchConfig::new()
            .with_move_delay(Duration::from_millis(self.delay_ms))
            .with_games(self.games);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    logging::init(logging::level_for(args.verbose, args.quiet));

    let runner = SeriesRunner::new(args.to_config()).context("invalid arguments")?;

    println!("{}", output::TITLE);
    let mut observer = ConsoleObserver::stdout();
    let summary = runner.run(&mut observer).context("match aborted")?;

    if runner.config().games > 1 {
        output::print_summary(&summary);
    }

    Ok(())
}
