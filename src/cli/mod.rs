//! CLI infrastructure for the noughts binary
//!
//! Argument parsing, logging setup, and text output helpers.

pub mod commands;
pub mod logging;
pub mod output;
