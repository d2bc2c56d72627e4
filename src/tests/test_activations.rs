use crate::activations::{ActivationConfig, ActivationKind, DEFAULT_NEGATIVE_SLOPE};

#[test]
fn test_relu_activation() {
    let relu = ActivationKind::Relu;
    assert_eq!(relu.apply(2.5, 0.01), 2.5);
    assert_eq!(relu.apply(0.0, 0.01), 0.0);
    assert!((relu.apply(-1.0, 0.01) + 0.01).abs() < 1e-12);
}

#[test]
fn test_relu_custom_slope() {
    let relu = ActivationKind::Relu;
    assert!((relu.apply(-4.0, 0.25) + 1.0).abs() < 1e-12);
    assert_eq!(relu.derivative(-4.0, 0.25), 0.25);
    assert_eq!(relu.derivative(0.0, 0.25), 1.0);
    assert_eq!(relu.derivative(3.0, 0.25), 1.0);
}

#[test]
fn test_sigmoid_activation() {
    let sigmoid = ActivationKind::Sigmoid;
    assert_eq!(sigmoid.apply(0.0, 0.01), 0.5);
    assert!((sigmoid.apply(2.0, 0.01) - 0.8807970779778823).abs() < 1e-12);
    assert!(sigmoid.apply(-1000.0, 0.01) >= 0.0);
    assert!(sigmoid.apply(1000.0, 0.01) <= 1.0);
}

#[test]
fn test_sigmoid_derivative() {
    let sigmoid = ActivationKind::Sigmoid;
    assert!((sigmoid.derivative(0.0, 0.01) - 0.25).abs() < 1e-12);
    let s = 1.0 / (1.0 + (-1.5f64).exp());
    assert!((sigmoid.derivative(1.5, 0.01) - s * (1.0 - s)).abs() < 1e-12);
}

#[test]
fn test_softmax_is_declared_only() {
    let softmax = ActivationKind::Softmax;
    for &x in &[-3.0, 0.0, 0.7, 12.0] {
        assert_eq!(softmax.apply(x, 0.01), x);
        assert_eq!(softmax.derivative(x, 0.01), 0.0);
    }
}

#[test]
fn test_activation_config_default() {
    let config = ActivationConfig::default();
    assert_eq!(config.hidden, ActivationKind::Relu);
    assert_eq!(config.output, ActivationKind::Sigmoid);
    assert_eq!(config.negative_slope, DEFAULT_NEGATIVE_SLOPE);
}

#[test]
fn test_activation_config_from_json() {
    let config: ActivationConfig =
        serde_json::from_str(r#"{ "output": "Relu", "negative_slope": 0.1 }"#).unwrap();
    assert_eq!(config.hidden, ActivationKind::Relu);
    assert_eq!(config.output, ActivationKind::Relu);
    assert_eq!(config.negative_slope, 0.1);
}
