use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::activations::ActivationKind;
use super::neuron::Neuron;

/// A weighted edge from one neuron to a neuron in the following layer.
///
/// The connection does not own either neuron; it stores their positions
/// within the two adjacent layers and the network hands it the layer slices.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    previous: usize,
    next: usize,
    pub(crate) weight: f64,
    kind: ActivationKind,
}

impl Connection {
    /// Create a connection with a weight drawn from `uniform(-0.5, 0.5)`.
    pub fn new<R: Rng + ?Sized>(previous: usize, next: usize, kind: ActivationKind, rng: &mut R) -> Self {
        let weight = Uniform::new(-0.5, 0.5).sample(rng);
        Connection { previous, next, weight, kind }
    }

    /// Create a connection whose weight starts at zero.
    pub fn zeroed(previous: usize, next: usize, kind: ActivationKind) -> Self {
        Connection { previous, next, weight: 0.0, kind }
    }

    pub fn previous(&self) -> usize {
        self.previous
    }

    pub fn next(&self) -> usize {
        self.next
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn kind(&self) -> ActivationKind {
        self.kind
    }

    /// Add this edge's contribution to the next neuron's accumulated input.
    ///
    /// The next neuron's activation must already have been reset for the pass.
    pub fn propagate_forward(&self, previous_layer: &[Neuron], next_layer: &mut [Neuron]) {
        next_layer[self.next].activation += previous_layer[self.previous].activation * self.weight;
    }

    /// Push the next neuron's gradient back through this edge.
    ///
    /// The previous neuron's bias is decremented on every call, so a neuron
    /// with `n` outgoing connections has its bias stepped `n` times per pass,
    /// each time by the derivative accumulated so far.
    pub fn propagate_backward(&mut self, previous_layer: &mut [Neuron], next_layer: &[Neuron], negative_slope: f64) {
        let next_derivative = next_layer[self.next].cost_derivative;
        let previous = &mut previous_layer[self.previous];

        previous.cost_derivative +=
            next_derivative * self.weight * self.kind.derivative(previous.activation, negative_slope);
        previous.bias -= previous.cost_derivative;

        self.weight -= next_derivative * previous.activation;
    }
}
