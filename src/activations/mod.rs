//! # Activation Functions Module
//!
//! Scalar activation functions applied neuron by neuron.
//!
//! ## Available Activations
//!
//! - **ReLU** (leaky): `x` for `x >= 0`, otherwise `x * negative_slope`
//! - **Sigmoid**: `1 / (1 + e^(-x))` - Outputs between 0 and 1
//! - **Softmax**: declared only. It is the identity and has a zero
//!   derivative; callers must not assume outputs are normalized.
//!
//! ## Usage Example
//!
//! ```rust
//! use deepq::activations::{ActivationConfig, ActivationKind};
//!
//! let config = ActivationConfig::new(ActivationKind::Relu, ActivationKind::Sigmoid)
//!     .with_negative_slope(0.05);
//!
//! assert_eq!(ActivationKind::Relu.apply(-2.0, config.negative_slope), -0.1);
//! assert_eq!(ActivationKind::Sigmoid.apply(0.0, config.negative_slope), 0.5);
//! ```
//!
//! The negative slope is part of [`ActivationConfig`] rather than global
//! state, so each network can be tuned and tested in isolation.

pub mod functions;

pub use functions::{ActivationConfig, ActivationKind, DEFAULT_NEGATIVE_SLOPE};
