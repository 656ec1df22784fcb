//! noughts - two random bots play Tic-Tac-Toe until a win or draw
//!
//! Runs with no arguments; flags only tune seeding, pacing and logging.

use anyhow::Result;
use clap::Parser;
use noughts::cli::commands::play::{self, PlayArgs};

fn main() -> Result<()> {
    play::execute(PlayArgs::parse())
}
