use serde::{Serialize, Deserialize};

/// Running counters kept by the agent while it acts and trains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingStats {
    pub decisions: u64,
    pub explorations: u64,
    pub exploitations: u64,

    /// Transitions that made it into the replay buffer
    pub transitions_stored: u64,
    /// Transitions dropped by prioritization or a disabled buffer
    pub transitions_skipped: u64,

    /// Scheduled training ticks that found a non-empty buffer
    pub training_steps: u64,
    pub samples_trained: u64,
    pub target_syncs: u64,

    /// Square cost of the most recent sample, measured before its backward pass
    pub last_square_cost: f64,
    pub cumulative_square_cost: f64,
}

impl TrainingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_decision(&mut self, explored: bool) {
        self.decisions += 1;
        if explored {
            self.explorations += 1;
        } else {
            self.exploitations += 1;
        }
    }

    pub fn record_transition(&mut self, stored: bool) {
        if stored {
            self.transitions_stored += 1;
        } else {
            self.transitions_skipped += 1;
        }
    }

    pub fn record_sample(&mut self, square_cost: f64) {
        self.samples_trained += 1;
        self.last_square_cost = square_cost;
        self.cumulative_square_cost += square_cost;
    }

    /// Mean square cost over every trained sample, 0 before any training.
    pub fn average_square_cost(&self) -> f64 {
        if self.samples_trained == 0 {
            0.0
        } else {
            self.cumulative_square_cost / self.samples_trained as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_square_cost() {
        let mut stats = TrainingStats::new();
        assert_eq!(stats.average_square_cost(), 0.0);

        stats.record_sample(1.0);
        stats.record_sample(3.0);
        assert_eq!(stats.samples_trained, 2);
        assert_eq!(stats.last_square_cost, 3.0);
        assert_eq!(stats.average_square_cost(), 2.0);
    }

    #[test]
    fn test_decision_split() {
        let mut stats = TrainingStats::new();
        stats.record_decision(true);
        stats.record_decision(false);
        stats.record_decision(false);
        assert_eq!(stats.decisions, 3);
        assert_eq!(stats.explorations, 1);
        assert_eq!(stats.exploitations, 2);
    }
}
