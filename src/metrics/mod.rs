//! # Metrics Module
//!
//! Counters for observing an agent during a run: how often it explored,
//! how many transitions reached the replay buffer, how many samples were
//! trained and the running square cost of those samples.

pub mod tracker;

pub use tracker::TrainingStats;
