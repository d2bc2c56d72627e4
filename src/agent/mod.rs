//! # Reinforcement Learning Agent Module
//!
//! The Deep Q-Learning control loop built on top of [`crate::network`].
//!
//! ## Core Concepts
//!
//! - **Online network**: trained on every replayed sample and used to act
//! - **Target network**: a hard copy of the online network, refreshed every
//!   `target_sync_every_n_samples` trained samples, used to value next states
//! - **Epsilon-greedy**: explore with probability
//!   `1 / (decisions + 1)^confidence`, otherwise take the best action,
//!   breaking ties uniformly at random
//! - **Experience replay**: transitions go into a bounded FIFO buffer and
//!   are sampled uniformly for training
//!
//! ## Example Usage
//!
//! ```rust
//! use deepq::agent::DqnAgentBuilder;
//! use deepq::config::DqnConfig;
//! use ndarray::array;
//!
//! let mut agent = DqnAgentBuilder::new()
//!     .layer_sizes(&[4, 16, 2])
//!     .config(DqnConfig { train_every_n_decisions: 1, ..DqnConfig::default() })
//!     .seed(3)
//!     .build()
//!     .unwrap();
//!
//! let mut state = array![0.0, 0.1, 0.0, -0.1];
//! for _ in 0..10 {
//!     let action = agent.select_action(state.view());
//!     let next_state = state.mapv(|x| x + action as f64 * 0.01);
//!     agent.record_outcome(1.0, false, next_state.view()).unwrap();
//!     agent.maybe_train().unwrap();
//!     state = next_state;
//! }
//! assert_eq!(agent.decision_count(), 10);
//! ```

mod dqn;
pub mod policy;

pub use dqn::{DqnAgent, DqnAgentBuilder};
pub use policy::{epsilon, greedy_action};
