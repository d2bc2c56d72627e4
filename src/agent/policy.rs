use ndarray::ArrayView1;
use rand::Rng;
use rand::seq::SliceRandom;

/// Exploration probability after `decision_count` decisions.
///
/// `1 / (decision_count + 1)^confidence`: always 1 for the first decision,
/// constant at 1 when `confidence == 0`, and decaying faster as
/// `confidence` grows.
pub fn epsilon(decision_count: u64, confidence: f64) -> f64 {
    1.0 / (decision_count as f64 + 1.0).powf(confidence)
}

/// Index of the largest value, choosing uniformly among every index tied
/// for the maximum.
///
/// NaN entries never win. If no entry is comparable (all NaN) index 0 is
/// returned.
pub fn greedy_action<R: Rng + ?Sized>(values: ArrayView1<f64>, rng: &mut R) -> usize {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, &value)| value == max)
        .map(|(i, _)| i)
        .collect();

    tied.choose(rng).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_epsilon_first_decision_is_one() {
        assert_eq!(epsilon(0, 3.0), 1.0);
        assert_eq!(epsilon(0, 0.0), 1.0);
    }

    #[test]
    fn test_epsilon_known_values() {
        assert!((epsilon(3, 1.0) - 0.25).abs() < 1e-12);
        assert!((epsilon(8, 0.5) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_greedy_picks_unique_max() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(greedy_action(array![0.1, 0.9, -2.0].view(), &mut rng), 1);
        }
    }

    #[test]
    fn test_greedy_finds_non_adjacent_ties() {
        let mut rng = StdRng::seed_from_u64(2);
        let values = array![3.0, 1.0, 3.0, 0.0, 3.0];
        let mut seen = [0usize; 5];
        for _ in 0..3000 {
            seen[greedy_action(values.view(), &mut rng)] += 1;
        }
        assert_eq!(seen[1], 0);
        assert_eq!(seen[3], 0);
        for &i in &[0, 2, 4] {
            assert!(seen[i] > 800, "index {} chosen only {} times", i, seen[i]);
        }
    }

    #[test]
    fn test_greedy_ignores_nan() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(greedy_action(array![f64::NAN, 2.0, 1.0].view(), &mut rng), 1);
        assert_eq!(greedy_action(array![f64::NAN, f64::NAN].view(), &mut rng), 0);
    }
}
