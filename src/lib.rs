//! # deepq - Deep Q-Learning on a from-scratch neural network
//!
//! `deepq` pairs a small multilayer feedforward network, stored as an
//! explicit graph of neurons and weighted connections and trained by
//! backpropagation, with a Deep Q-Learning agent that uses it as its
//! function approximator.
//!
//! ## Key Features
//!
//! - **Neural Network**: leaky ReLU / sigmoid neurons, per-sample forward and
//!   backward passes, squared-error cost
//! - **DQN Agent**: epsilon-greedy decisions with uniform tie-breaking, a
//!   bounded replay buffer with zero-reward prioritization, scheduled
//!   training and hard target-network synchronization
//! - **Reproducibility**: every random draw goes through an injectable,
//!   seedable generator
//! - **Configuration**: validated hyperparameters, loadable from JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use deepq::agent::DqnAgentBuilder;
//! use deepq::config::DqnConfig;
//! use ndarray::array;
//!
//! let mut agent = DqnAgentBuilder::new()
//!     .layer_sizes(&[3, 12, 2])
//!     .config(DqnConfig::default())
//!     .seed(11)
//!     .build()
//!     .unwrap();
//!
//! let action = agent.select_action(array![0.5, 0.0, -0.5].view());
//! agent.record_outcome(0.0, true, array![0.0, 0.0, 0.0].view()).unwrap();
//! agent.maybe_train().unwrap();
//! assert!(action < 2);
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation kinds and per-network activation settings
//! - [`agent`] - The DQN agent, its builder and the epsilon-greedy policy
//! - [`config`] - Hyperparameters, validation and JSON loading
//! - [`error`] - Error types and result handling
//! - [`metrics`] - Training counters and running cost
//! - [`network`] - Neurons, connections and the network graph
//! - [`replay_buffer`] - Experiences and the bounded FIFO replay buffer

pub mod activations;
pub mod agent;
pub mod config;
pub mod error;
pub mod metrics;
pub mod network;
pub mod replay_buffer;

pub use error::{DeepQError, Result};

#[cfg(test)]
mod tests;
