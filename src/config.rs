//! Hyperparameters for [`DqnAgent`](crate::agent::DqnAgent).
//!
//! A config can be built in code or read from JSON. Missing JSON fields
//! take their default value:
//!
//! ```rust
//! use deepq::config::DqnConfig;
//!
//! let config = DqnConfig::from_json_str(r#"{ "discount_rate": 0.95, "prioritization": 0.5 }"#).unwrap();
//! assert_eq!(config.discount_rate, 0.95);
//! assert_eq!(config.train_every_n_decisions, 10);
//! ```

use serde::{Serialize, Deserialize};
use std::fs;
use std::path::Path;

use crate::error::{DeepQError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DqnConfig {
    /// Exploration decay exponent: `epsilon = 1 / (decisions + 1)^confidence`.
    pub confidence: f64,
    /// Weight of the target network's best next-state value.
    pub discount_rate: f64,
    pub learning_rate: f64,
    /// Replay capacity; 0 disables storage (and therefore training).
    pub max_replay_buffer_size: usize,
    pub train_every_n_decisions: u64,
    pub samples_per_training_step: usize,
    pub target_sync_every_n_samples: usize,
    /// Probability of dropping a zero-reward transition instead of storing it.
    pub prioritization: f64,
}

impl Default for DqnConfig {
    fn default() -> Self {
        DqnConfig {
            confidence: 0.5,
            discount_rate: 0.9,
            learning_rate: 0.001,
            max_replay_buffer_size: 10_000,
            train_every_n_decisions: 10,
            samples_per_training_step: 32,
            target_sync_every_n_samples: 1_000,
            prioritization: 0.0,
        }
    }
}

impl DqnConfig {
    /// Set the learning rate in thousandths (`1.0` becomes `0.001`).
    pub fn with_milli_learning_rate(mut self, milli_learning_rate: f64) -> Self {
        self.learning_rate = milli_learning_rate * 0.001;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.train_every_n_decisions == 0 {
            return Err(DeepQError::invalid_parameter(
                "train_every_n_decisions",
                "must be greater than 0",
            ));
        }
        if self.target_sync_every_n_samples == 0 {
            return Err(DeepQError::invalid_parameter(
                "target_sync_every_n_samples",
                "must be greater than 0",
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(DeepQError::InvalidParameter {
                name: "learning_rate".to_string(),
                reason: format!("must be a positive finite number, got {}", self.learning_rate),
            });
        }
        if !self.confidence.is_finite() || self.confidence < 0.0 {
            return Err(DeepQError::InvalidParameter {
                name: "confidence".to_string(),
                reason: format!("must be a non-negative finite number, got {}", self.confidence),
            });
        }
        if !self.discount_rate.is_finite() {
            return Err(DeepQError::InvalidParameter {
                name: "discount_rate".to_string(),
                reason: format!("must be finite, got {}", self.discount_rate),
            });
        }
        if !(0.0..=1.0).contains(&self.prioritization) {
            return Err(DeepQError::InvalidParameter {
                name: "prioritization".to_string(),
                reason: format!("must be within [0, 1], got {}", self.prioritization),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DqnConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
