//! # Network Module
//!
//! A fully connected feedforward network stored as an explicit graph:
//! layers of [`Neuron`]s and, between every pair of adjacent layers, the
//! complete bipartite set of [`Connection`]s.
//!
//! Training is a single-sample procedure driven by the caller:
//!
//! ```rust
//! use deepq::activations::ActivationConfig;
//! use deepq::network::Network;
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut network = Network::new(&[2, 4, 1], ActivationConfig::default(), &mut rng);
//! network.set_learning_rate(0.1);
//!
//! network.set_inputs(array![1.0, 0.0].view());
//! network.forward_pass();
//! network.set_targets(array![1.0].view());
//! let before = network.square_cost();
//! network.backward_pass();
//! # let _ = before;
//! ```

pub mod connection;
pub mod neuron;

pub use connection::Connection;
pub use neuron::Neuron;

use ndarray::{Array1, ArrayView1};
use rand::Rng;

use crate::activations::{ActivationConfig, ActivationKind};
use crate::error::{DeepQError, Result};

#[derive(Clone, Debug)]
pub struct Network {
    layers: Vec<Vec<Neuron>>,
    connections: Vec<Vec<Connection>>,
    expected_values: Vec<f64>,
    learning_rate: f64,
    activation: ActivationConfig,
}

impl Network {
    /// Create a network whose weights are drawn from `uniform(-0.5, 0.5)`.
    ///
    /// Layer sizes of 0 are raised to 1, and fewer than two sizes yield a
    /// minimal `[1, 1]` network.
    pub fn new<R: Rng + ?Sized>(layer_sizes: &[usize], activation: ActivationConfig, rng: &mut R) -> Self {
        Self::build(layer_sizes, activation, |previous, next, kind| {
            Connection::new(previous, next, kind, &mut *rng)
        })
    }

    /// Create a network whose weights all start at zero.
    pub fn zeroed(layer_sizes: &[usize], activation: ActivationConfig) -> Self {
        Self::build(layer_sizes, activation, Connection::zeroed)
    }

    fn build<F>(layer_sizes: &[usize], activation: ActivationConfig, mut connect: F) -> Self
    where
        F: FnMut(usize, usize, ActivationKind) -> Connection,
    {
        let sizes = normalize_layer_sizes(layer_sizes);
        let output_index = sizes.len() - 1;

        let layers: Vec<Vec<Neuron>> = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let kind = if i == output_index { activation.output } else { activation.hidden };
                (0..size).map(|_| Neuron::new(kind)).collect()
            })
            .collect();

        let connections = sizes
            .windows(2)
            .map(|window| {
                let mut set = Vec::with_capacity(window[0] * window[1]);
                for previous in 0..window[0] {
                    for next in 0..window[1] {
                        set.push(connect(previous, next, activation.hidden));
                    }
                }
                set
            })
            .collect();

        Network {
            layers,
            connections,
            expected_values: vec![0.0; sizes[output_index]],
            learning_rate: 0.0,
            activation,
        }
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].len()
    }

    pub fn output_size(&self) -> usize {
        self.output_layer().len()
    }

    pub fn activation_config(&self) -> ActivationConfig {
        self.activation
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    pub fn layers(&self) -> &[Vec<Neuron>] {
        &self.layers
    }

    pub fn connections(&self) -> &[Vec<Connection>] {
        &self.connections
    }

    fn output_layer(&self) -> &[Neuron] {
        &self.layers[self.layers.len() - 1]
    }

    /// Load the input layer. Missing values are zero and extra values are ignored.
    ///
    /// This does not run the network; call [`Network::forward_pass`] next.
    pub fn set_inputs(&mut self, values: ArrayView1<f64>) {
        for (i, neuron) in self.layers[0].iter_mut().enumerate() {
            neuron.activation = values.get(i).copied().unwrap_or(0.0);
        }
    }

    pub fn forward_pass(&mut self) {
        for layer in self.layers.iter_mut().skip(1) {
            for neuron in layer.iter_mut() {
                neuron.activation = 0.0;
            }
        }

        let negative_slope = self.activation.negative_slope;
        for (i, connection_set) in self.connections.iter().enumerate() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            let previous_layer = &head[i];
            let next_layer = &mut tail[0];

            for connection in connection_set {
                connection.propagate_forward(previous_layer, next_layer);
            }
            for neuron in next_layer.iter_mut() {
                neuron.activate(negative_slope);
            }
        }
    }

    pub fn outputs(&self) -> Array1<f64> {
        self.output_layer().iter().map(Neuron::activation).collect()
    }

    /// Output activations rounded to the nearest integer.
    pub fn rounded_outputs(&self) -> Array1<i64> {
        self.output_layer()
            .iter()
            .map(|neuron| neuron.activation().round() as i64)
            .collect()
    }

    /// Store the training target, padding with zeros or truncating to the output width.
    pub fn set_targets(&mut self, expected: ArrayView1<f64>) {
        for (i, slot) in self.expected_values.iter_mut().enumerate() {
            *slot = expected.get(i).copied().unwrap_or(0.0);
        }
    }

    pub fn targets(&self) -> &[f64] {
        &self.expected_values
    }

    /// Sum of squared differences between the stored targets and the current outputs.
    pub fn square_cost(&self) -> f64 {
        self.expected_values
            .iter()
            .zip(self.output_layer())
            .map(|(expected, neuron)| (expected - neuron.activation()).powi(2))
            .sum()
    }

    /// Adjust every weight and bias toward the stored targets.
    ///
    /// Output gradients are seeded first, then connection sets are walked
    /// from the last to the first so each layer's derivatives are complete
    /// before the layer below consumes them.
    pub fn backward_pass(&mut self) {
        for layer in self.layers.iter_mut() {
            for neuron in layer.iter_mut() {
                neuron.cost_derivative = 0.0;
            }
        }

        let negative_slope = self.activation.negative_slope;
        let learning_rate = self.learning_rate;
        let output_index = self.layers.len() - 1;
        for (neuron, &expected) in self.layers[output_index].iter_mut().zip(&self.expected_values) {
            neuron.output_layer_gradient(expected, learning_rate, negative_slope);
        }

        for i in (0..self.connections.len()).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            let previous_layer = &mut head[i];
            let next_layer = &tail[0];

            for connection in self.connections[i].iter_mut() {
                connection.propagate_backward(previous_layer, next_layer, negative_slope);
            }
        }
    }

    /// Bias of neuron `index` in `layer`. Panics when out of range.
    pub fn bias(&self, layer: usize, index: usize) -> f64 {
        self.layers[layer][index].bias
    }

    /// Weight of connection `index` in connection set `layer`. Panics when out of range.
    ///
    /// Connection `index` links previous neuron `index / next_len` to next
    /// neuron `index % next_len`.
    pub fn weight(&self, layer: usize, index: usize) -> f64 {
        self.connections[layer][index].weight
    }

    pub(crate) fn set_bias(&mut self, layer: usize, index: usize, bias: f64) {
        self.layers[layer][index].bias = bias;
    }

    pub(crate) fn set_weight(&mut self, layer: usize, index: usize, weight: f64) {
        self.connections[layer][index].weight = weight;
    }

    /// Hard-copy every bias and weight from `source`, position for position.
    pub fn copy_parameters_from(&mut self, source: &Network) -> Result<()> {
        let expected = self.layer_sizes();
        let actual = source.layer_sizes();
        if expected != actual {
            return Err(DeepQError::dimension_mismatch(
                format!("layer sizes {:?}", expected),
                format!("layer sizes {:?}", actual),
            ));
        }

        for (layer, neurons) in source.layers.iter().enumerate() {
            for (index, neuron) in neurons.iter().enumerate() {
                self.set_bias(layer, index, neuron.bias);
            }
        }
        for (layer, connection_set) in source.connections.iter().enumerate() {
            for (index, connection) in connection_set.iter().enumerate() {
                self.set_weight(layer, index, connection.weight);
            }
        }
        Ok(())
    }
}

fn normalize_layer_sizes(layer_sizes: &[usize]) -> Vec<usize> {
    if layer_sizes.len() < 2 {
        return vec![1, 1];
    }
    layer_sizes.iter().map(|&size| size.max(1)).collect()
}
