//! Match orchestration
//!
//! - [`MatchRunner`]: one match, step by step, X first
//! - [`SeriesRunner`]: repeated matches with an outcome tally

pub mod runner;
pub mod series;

pub use runner::MatchRunner;
pub use series::{SeriesRunner, SeriesSummary};

pub use crate::ports::{Agent, Observer};
