use serde::{Serialize, Deserialize};

/// Default slope applied to negative inputs by the leaky ReLU.
pub const DEFAULT_NEGATIVE_SLOPE: f64 = 0.01;

/// The nonlinearity a neuron applies after adding its bias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ActivationKind {
    /// Leaky ReLU; the slope below zero comes from [`ActivationConfig::negative_slope`].
    #[default]
    Relu,
    Sigmoid,
    /// Declared but not implemented: `apply` leaves the value unchanged and
    /// `derivative` is zero. No normalization across the layer takes place.
    Softmax,
}

impl ActivationKind {
    /// Apply the activation function to a single pre-activation value.
    pub fn apply(&self, x: f64, negative_slope: f64) -> f64 {
        match self {
            ActivationKind::Relu => {
                if x < 0.0 { x * negative_slope } else { x }
            }
            ActivationKind::Sigmoid => sigmoid(x),
            ActivationKind::Softmax => x,
        }
    }

    /// Derivative of the activation function evaluated at `x`.
    ///
    /// Like the forward function, the derivative is evaluated on the value
    /// the neuron currently holds, which after a forward pass is the
    /// post-activation value.
    pub fn derivative(&self, x: f64, negative_slope: f64) -> f64 {
        match self {
            ActivationKind::Relu => {
                if x < 0.0 { negative_slope } else { 1.0 }
            }
            ActivationKind::Sigmoid => {
                let s = sigmoid(x);
                s * (1.0 - s)
            }
            ActivationKind::Softmax => 0.0,
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Activation settings for one network.
///
/// Every network carries its own copy, so two networks in the same process
/// can use different slopes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationConfig {
    /// Kind used by input and hidden neurons and by every connection.
    pub hidden: ActivationKind,
    /// Kind used by output neurons.
    pub output: ActivationKind,
    pub negative_slope: f64,
}

impl ActivationConfig {
    pub fn new(hidden: ActivationKind, output: ActivationKind) -> Self {
        ActivationConfig {
            hidden,
            output,
            negative_slope: DEFAULT_NEGATIVE_SLOPE,
        }
    }

    pub fn with_negative_slope(mut self, negative_slope: f64) -> Self {
        self.negative_slope = negative_slope;
        self
    }
}

impl Default for ActivationConfig {
    fn default() -> Self {
        ActivationConfig::new(ActivationKind::Relu, ActivationKind::Sigmoid)
    }
}
