#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use deepq::activations::{ActivationConfig, ActivationKind};
    use deepq::agent::{epsilon, greedy_action};
    use deepq::network::Network;
    use deepq::replay_buffer::{Experience, ReplayBuffer};
    use ndarray::{array, Array1};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Strategy for generating valid layer sizes
    fn layer_sizes_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..=12, 2..=4)
    }

    fn input_strategy(max_len: usize) -> impl Strategy<Value = Array1<f64>> {
        prop::collection::vec(-100.0f64..100.0, 0..=max_len).prop_map(Array1::from_vec)
    }

    proptest! {
        #[test]
        fn test_output_length_matches_layer(
            layer_sizes in layer_sizes_strategy(),
            input in input_strategy(16),
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut network = Network::new(&layer_sizes, ActivationConfig::default(), &mut rng);
            network.set_inputs(input.view());
            network.forward_pass();

            let outputs = network.outputs();
            prop_assert_eq!(outputs.len(), *layer_sizes.last().unwrap());
            for &value in outputs.iter() {
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }

        #[test]
        fn test_forward_pass_is_deterministic(
            layer_sizes in layer_sizes_strategy(),
            input in input_strategy(16),
            other in input_strategy(16),
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut network = Network::new(&layer_sizes, ActivationConfig::default(), &mut rng);

            network.set_inputs(input.view());
            network.forward_pass();
            let first = network.outputs();

            network.set_inputs(other.view());
            network.forward_pass();

            network.set_inputs(input.view());
            network.forward_pass();
            prop_assert_eq!(network.outputs(), first);
        }

        #[test]
        fn test_epsilon_strictly_decreasing(n in 0u64..1_000_000, confidence in 0.01f64..5.0) {
            let current = epsilon(n, confidence);
            prop_assert!(current > 0.0 && current <= 1.0);
            prop_assert!(epsilon(n + 1, confidence) < current);
        }

        #[test]
        fn test_epsilon_constant_without_confidence(n in any::<u64>()) {
            prop_assert_eq!(epsilon(n, 0.0), 1.0);
        }

        #[test]
        fn test_greedy_action_returns_a_maximum(
            values in prop::collection::vec(-5i32..5, 1..20),
            seed in any::<u64>()
        ) {
            let values: Array1<f64> = values.into_iter().map(f64::from).collect();
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mut rng = StdRng::seed_from_u64(seed);

            let action = greedy_action(values.view(), &mut rng);
            prop_assert!(action < values.len());
            prop_assert_eq!(values[action], max);
        }

        #[test]
        fn test_sigmoid_bounded(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
            let y = ActivationKind::Sigmoid.apply(x, 0.01);
            prop_assert!((0.0..=1.0).contains(&y));
        }

        #[test]
        fn test_replay_buffer_never_exceeds_capacity(
            capacity in 0usize..20,
            rewards in prop::collection::vec(prop_oneof![Just(0.0f64), -1.0f64..1.0], 0..100),
            prioritization in 0.0f64..=1.0,
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut buffer = ReplayBuffer::new(capacity);
            for (i, &reward) in rewards.iter().enumerate() {
                let experience = Experience::new(array![i as f64], 0, reward, false, array![0.0]);
                buffer.record(experience, prioritization, &mut rng);
                prop_assert!(buffer.len() <= capacity);
            }
        }
    }
}
