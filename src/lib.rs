//! Random bot vs random bot Tic-Tac-Toe
//!
//! This crate provides:
//! - A 3x3 board with write-once cells and win/draw detection
//! - A random agent whose randomness is injected through a picker port
//! - A turn-taking match runner that reports each move to an observer
//! - A small CLI that prints the game as it is played

pub mod adapters;
pub mod agents;
pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
