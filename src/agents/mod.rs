//! Agent implementations

pub mod random;

pub use random::RandomAgent;
