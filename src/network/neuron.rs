use crate::activations::ActivationKind;

/// A single unit of the network.
///
/// `activation` and `cost_derivative` are scratch values rewritten by every
/// forward and backward pass. `bias` only changes during backpropagation or
/// when parameters are copied from another network.
#[derive(Clone, Debug, PartialEq)]
pub struct Neuron {
    pub(crate) activation: f64,
    pub(crate) bias: f64,
    pub(crate) cost_derivative: f64,
    kind: ActivationKind,
}

impl Neuron {
    pub fn new(kind: ActivationKind) -> Self {
        Neuron {
            activation: 0.0,
            bias: 0.0,
            cost_derivative: 0.0,
            kind,
        }
    }

    pub fn activation(&self) -> f64 {
        self.activation
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn cost_derivative(&self) -> f64 {
        self.cost_derivative
    }

    pub fn kind(&self) -> ActivationKind {
        self.kind
    }

    /// Add the bias to the accumulated input and apply the activation function.
    pub fn activate(&mut self, negative_slope: f64) {
        self.activation += self.bias;
        self.activation = self.kind.apply(self.activation, negative_slope);
    }

    /// Seed backpropagation from the squared-error loss.
    ///
    /// The learning rate is folded into the derivative here, so everything
    /// downstream (connection weights and hidden biases) is already scaled.
    pub fn output_layer_gradient(&mut self, expected: f64, learning_rate: f64, negative_slope: f64) {
        self.cost_derivative = 2.0
            * (self.activation - expected)
            * self.kind.derivative(self.activation, negative_slope)
            * learning_rate;
        self.bias -= self.cost_derivative;
    }
}
