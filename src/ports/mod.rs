//! Ports (trait boundaries) for external dependencies.
//!
//! The match logic only talks to these traits. Randomness, move selection
//! and output are supplied by adapters so tests can swap in deterministic
//! stand-ins.

pub mod agent;
pub mod observer;
pub mod picker;

pub use agent::Agent;
pub use observer::Observer;
pub use picker::MovePicker;
