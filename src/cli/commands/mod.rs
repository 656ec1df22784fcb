//! CLI commands

pub mod play;
