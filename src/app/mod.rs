//! Application layer: match configuration and agent wiring.
//!
//! ```
//! use std::time::Duration;
//!
//! use noughts::app::MatchConfig;
//!
//! let config = MatchConfig::new()
//!     .with_seed(42)
//!     .with_move_delay(Duration::ZERO)
//!     .with_games(3);
//! config.validate()?;
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod config;

pub use config::{DEFAULT_MOVE_DELAY, MatchConfig};
