use crate::activations::ActivationConfig;
use crate::config::DqnConfig;
use crate::error::{DeepQError, Result};
use crate::metrics::TrainingStats;
use crate::network::Network;
use crate::replay_buffer::{Experience, ReplayBuffer};
use super::policy::{epsilon, greedy_action};
use log::{debug, info, trace, warn};
use ndarray::{Array1, ArrayView1};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

/// Deep Q-Learning agent with a target network and experience replay.
///
/// The agent is driven one step at a time by an external loop:
///
/// 1. [`select_action`](DqnAgent::select_action) with the current state
/// 2. the environment executes the action
/// 3. [`record_outcome`](DqnAgent::record_outcome) with the reward, the
///    terminal flag and the resulting state
/// 4. [`maybe_train`](DqnAgent::maybe_train), which only trains on the
///    scheduled decisions
///
/// # Example
///
/// ```rust
/// use deepq::agent::DqnAgentBuilder;
/// use deepq::config::DqnConfig;
/// use ndarray::array;
///
/// let config = DqnConfig {
///     train_every_n_decisions: 4,
///     samples_per_training_step: 8,
///     target_sync_every_n_samples: 64,
///     ..DqnConfig::default()
/// };
/// let mut agent = DqnAgentBuilder::new()
///     .layer_sizes(&[2, 8, 3])
///     .config(config)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let state = array![0.1, -0.4];
/// let action = agent.select_action(state.view());
/// assert!(action < 3);
///
/// agent.record_outcome(1.0, false, array![0.2, -0.3].view()).unwrap();
/// agent.maybe_train().unwrap();
/// ```
pub struct DqnAgent<R: Rng = StdRng> {
    /// Network trained on replayed samples and used for decisions
    online_network: Network,

    /// Periodically synchronized copy used to evaluate next states
    target_network: Network,

    replay_buffer: ReplayBuffer,

    config: DqnConfig,

    // Half-formed transition waiting for its outcome
    last_state: Array1<f64>,
    last_action: usize,
    last_reward: f64,
    last_terminal: bool,
    next_state: Array1<f64>,
    awaiting_outcome: bool,

    decision_count: u64,
    samples_since_sync: usize,

    stats: TrainingStats,

    rng: R,
}

impl DqnAgent<StdRng> {
    /// Create an agent with default activations and an entropy-seeded generator.
    pub fn new(layer_sizes: &[usize], config: DqnConfig) -> Result<Self> {
        Self::with_rng(layer_sizes, ActivationConfig::default(), config, StdRng::from_entropy())
    }
}

impl<R: Rng> DqnAgent<R> {
    /// Create an agent that draws all of its randomness from `rng`.
    ///
    /// The online network starts from random weights, the target network
    /// from zero weights. Both share the (normalized) topology.
    pub fn with_rng(
        layer_sizes: &[usize],
        activation: ActivationConfig,
        config: DqnConfig,
        mut rng: R,
    ) -> Result<Self> {
        config.validate()?;

        let mut online_network = Network::new(layer_sizes, activation, &mut rng);
        online_network.set_learning_rate(config.learning_rate);
        let target_network = Network::zeroed(layer_sizes, activation);

        info!(
            "Created DQN agent: layers={:?}, replay capacity={}, train every {} decisions, sync every {} samples",
            online_network.layer_sizes(),
            config.max_replay_buffer_size,
            config.train_every_n_decisions,
            config.target_sync_every_n_samples,
        );

        Ok(DqnAgent {
            online_network,
            target_network,
            replay_buffer: ReplayBuffer::new(config.max_replay_buffer_size),
            config,
            last_state: Array1::zeros(0),
            last_action: 0,
            last_reward: 0.0,
            last_terminal: false,
            next_state: Array1::zeros(0),
            awaiting_outcome: false,
            decision_count: 0,
            samples_since_sync: 0,
            stats: TrainingStats::new(),
            rng,
        })
    }

    /// Replace the hyperparameters.
    ///
    /// The online learning rate follows the new config, and a smaller replay
    /// capacity drops the oldest experiences. Counters are left untouched.
    pub fn reconfigure(&mut self, config: DqnConfig) -> Result<()> {
        config.validate()?;
        self.online_network.set_learning_rate(config.learning_rate);
        self.replay_buffer.resize(config.max_replay_buffer_size);
        info!("Reconfigured DQN agent: {:?}", config);
        self.config = config;
        Ok(())
    }

    /// Current exploration probability.
    pub fn epsilon(&self) -> f64 {
        epsilon(self.decision_count, self.config.confidence)
    }

    /// Choose an action for `state` with the epsilon-greedy policy.
    ///
    /// The returned index is always below the output layer width.
    pub fn select_action(&mut self, state: ArrayView1<f64>) -> usize {
        if self.awaiting_outcome {
            warn!(
                "select_action called before the outcome of decision {} was recorded; dropping it",
                self.decision_count
            );
        }

        self.last_state = state.to_owned();
        self.online_network.set_inputs(state);
        self.online_network.forward_pass();

        let explore = self.rng.gen::<f64>() < self.epsilon();
        let action = if explore {
            self.rng.gen_range(0..self.online_network.output_size())
        } else {
            let outputs = self.online_network.outputs();
            greedy_action(outputs.view(), &mut self.rng)
        };

        self.last_action = action;
        self.decision_count += 1;
        self.awaiting_outcome = true;
        self.stats.record_decision(explore);
        action
    }

    /// Complete the pending transition and offer it to the replay buffer.
    ///
    /// Must follow exactly one [`select_action`](DqnAgent::select_action).
    /// Zero-reward transitions are skipped with probability
    /// `prioritization`; the oldest experience is evicted when the buffer is
    /// full either way.
    pub fn record_outcome(&mut self, reward: f64, terminal: bool, next_state: ArrayView1<f64>) -> Result<()> {
        if !self.awaiting_outcome {
            warn!("record_outcome called without a pending decision");
            return Err(DeepQError::NoPendingDecision);
        }
        self.awaiting_outcome = false;

        self.last_reward = reward;
        self.last_terminal = terminal;
        self.next_state = next_state.to_owned();

        let experience = Experience::new(
            self.last_state.clone(),
            self.last_action,
            reward,
            terminal,
            self.next_state.clone(),
        );
        let stored = self.replay_buffer.record(experience, self.config.prioritization, &mut self.rng);
        self.stats.record_transition(stored);
        Ok(())
    }

    /// Train on replayed samples when the decision count hits the schedule.
    ///
    /// Returns the number of samples trained, which is 0 when the tick is not
    /// scheduled or the buffer is empty.
    pub fn maybe_train(&mut self) -> Result<usize> {
        if self.decision_count % self.config.train_every_n_decisions != 0 || self.replay_buffer.is_empty() {
            return Ok(0);
        }

        let samples = self.config.samples_per_training_step;
        for _ in 0..samples {
            self.train_on_sample()?;
        }
        self.stats.training_steps += 1;

        debug!(
            "Training step {} at decision {}: {} samples, last cost {:.6}, average cost {:.6}",
            self.stats.training_steps,
            self.decision_count,
            samples,
            self.stats.last_square_cost,
            self.stats.average_square_cost(),
        );
        Ok(samples)
    }

    fn train_on_sample(&mut self) -> Result<()> {
        let experience = match self.replay_buffer.sample(&mut self.rng) {
            Some(experience) => experience,
            None => return Ok(()),
        };

        let corrected = corrected_outputs(
            &mut self.online_network,
            &mut self.target_network,
            experience,
            self.config.discount_rate,
            &mut self.rng,
        );

        self.online_network.set_targets(corrected.view());
        let cost = self.online_network.square_cost();
        self.online_network.backward_pass();
        self.stats.record_sample(cost);

        self.samples_since_sync += 1;
        if self.samples_since_sync >= self.config.target_sync_every_n_samples {
            self.sync_target_network()?;
        }
        Ok(())
    }

    /// Run both networks on `experience` and build the online network's
    /// training target, without training.
    pub fn training_target(&mut self, experience: &Experience) -> Array1<f64> {
        corrected_outputs(
            &mut self.online_network,
            &mut self.target_network,
            experience,
            self.config.discount_rate,
            &mut self.rng,
        )
    }

    /// Hard-copy every online bias and weight into the target network.
    pub fn sync_target_network(&mut self) -> Result<()> {
        self.target_network.copy_parameters_from(&self.online_network)?;
        self.samples_since_sync = 0;
        self.stats.target_syncs += 1;
        debug!(
            "Synchronized target network (sync #{}, {} samples trained)",
            self.stats.target_syncs, self.stats.samples_trained
        );
        Ok(())
    }

    /// Square cost of the online network against its most recent training target.
    pub fn square_cost(&self) -> f64 {
        self.online_network.square_cost()
    }

    /// Raw output activations of the online network.
    pub fn outputs(&self) -> Array1<f64> {
        self.online_network.outputs()
    }

    pub fn online_network(&self) -> &Network {
        &self.online_network
    }

    pub fn target_network(&self) -> &Network {
        &self.target_network
    }

    pub fn replay_buffer(&self) -> &ReplayBuffer {
        &self.replay_buffer
    }

    pub fn config(&self) -> &DqnConfig {
        &self.config
    }

    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    pub fn decision_count(&self) -> u64 {
        self.decision_count
    }

    pub fn samples_since_sync(&self) -> usize {
        self.samples_since_sync
    }

    pub fn last_state(&self) -> ArrayView1<f64> {
        self.last_state.view()
    }

    pub fn last_action(&self) -> usize {
        self.last_action
    }

    pub fn last_reward(&self) -> f64 {
        self.last_reward
    }

    pub fn last_terminal(&self) -> bool {
        self.last_terminal
    }

    pub fn next_state(&self) -> ArrayView1<f64> {
        self.next_state.view()
    }

    pub fn is_awaiting_outcome(&self) -> bool {
        self.awaiting_outcome
    }

    #[cfg(test)]
    pub(crate) fn online_network_mut(&mut self) -> &mut Network {
        &mut self.online_network
    }

    #[cfg(test)]
    pub(crate) fn target_network_mut(&mut self) -> &mut Network {
        &mut self.target_network
    }
}

/// Copy the online outputs for `experience.state` and overwrite the taken
/// action's slot with the Bellman target computed from the target network.
fn corrected_outputs<R: Rng + ?Sized>(
    online: &mut Network,
    target: &mut Network,
    experience: &Experience,
    discount_rate: f64,
    rng: &mut R,
) -> Array1<f64> {
    online.set_inputs(experience.state.view());
    online.forward_pass();
    target.set_inputs(experience.next_state.view());
    target.forward_pass();

    let mut corrected = online.outputs();
    let target_value = if experience.terminal {
        experience.reward
    } else {
        let next_values = target.outputs();
        let best = greedy_action(next_values.view(), rng);
        experience.reward + discount_rate * next_values[best]
    };

    if !target_value.is_finite() {
        warn!("Non-finite training target {} for action {}", target_value, experience.action);
    }
    match corrected.get_mut(experience.action) {
        Some(slot) => *slot = target_value,
        None => warn!(
            "Experience action {} is outside the output layer of width {}",
            experience.action,
            corrected.len()
        ),
    }
    trace!("Corrected outputs for action {}: {:?}", experience.action, corrected);
    corrected
}

/// Builder pattern for DqnAgent
pub struct DqnAgentBuilder {
    layer_sizes: Vec<usize>,
    activation: ActivationConfig,
    config: DqnConfig,
    seed: Option<u64>,
}

impl DqnAgentBuilder {
    pub fn new() -> Self {
        DqnAgentBuilder {
            layer_sizes: vec![],
            activation: ActivationConfig::default(),
            config: DqnConfig::default(),
            seed: None,
        }
    }

    pub fn layer_sizes(mut self, sizes: &[usize]) -> Self {
        self.layer_sizes = sizes.to_vec();
        self
    }

    pub fn activation(mut self, activation: ActivationConfig) -> Self {
        self.activation = activation;
        self
    }

    pub fn config(mut self, config: DqnConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the agent's generator for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<DqnAgent<StdRng>> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        DqnAgent::with_rng(&self.layer_sizes, self.activation, self.config, rng)
    }
}

impl Default for DqnAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
