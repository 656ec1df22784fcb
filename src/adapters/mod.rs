//! Adapters implementing domain ports.
//!
//! Infrastructure implementations of the traits in [`crate::ports`]:
//! a seedable random picker and a text observer that prints the match.

pub mod console_observer;
pub mod rng_picker;

pub use console_observer::ConsoleObserver;
pub use rng_picker::RngPicker;
