//! Vote-Weight Normalizer
//!
//! Converts a proposal's raw per-option vote totals into a percentage
//! distribution. Vote weights are token balances in 18-decimal fixed point,
//! so totals are summed in exact integer arithmetic; only the final
//! two-decimal percentage becomes a float.

/// Percentage of the total vote weight per option, two decimal places.
///
/// Each entry is `round(weight × 10000 / sum) / 100`, rounded in integer
/// arithmetic for cross-platform determinism. Entries are rounded
/// independently, so the row may drift from summing to exactly 100.00;
/// consumers render the entries as-is. A sum of zero (nobody voted) yields
/// all-zero entries - an explicit branch, never a division.
pub fn weighted_histogram(histogram: &[u128]) -> Vec<f64> {
    let sum = histogram
        .iter()
        .fold(0u128, |acc, &weight| acc.saturating_add(weight));
    if sum == 0 {
        return vec![0.0; histogram.len()];
    }
    histogram
        .iter()
        .map(|&weight| {
            let scaled = weight.saturating_mul(10_000);
            let basis_points = (scaled.saturating_add(sum / 2)) / sum;
            basis_points as f64 / 100.0
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_all_zero_histogram_yields_zeros() {
        assert_eq!(weighted_histogram(&[0, 0, 0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_histogram() {
        assert!(weighted_histogram(&[]).is_empty());
    }

    #[test]
    fn test_exact_split() {
        assert_eq!(weighted_histogram(&[30, 70]), vec![30.0, 70.0]);
    }

    #[test]
    fn test_single_option_takes_all() {
        assert_eq!(weighted_histogram(&[42]), vec![100.0]);
    }

    #[test]
    fn test_two_decimal_rounding() {
        // 1/3 → 33.33%, 2/3 → 66.67%
        assert_eq!(weighted_histogram(&[1, 2]), vec![33.33, 66.67]);
    }

    #[test]
    fn test_rounding_drift_is_preserved() {
        // Each third rounds to 33.33; the row sums to 99.99, not 100.00
        let weights = weighted_histogram(&[1, 1, 1]);
        assert_eq!(weights, vec![33.33, 33.33, 33.33]);
        let total: f64 = weights.iter().sum();
        assert!((total - 100.0).abs() <= weights.len() as f64 * 0.005 + 1e-9);
        assert_ne!(total, 100.0);
    }

    #[test]
    fn test_large_token_weights_keep_precision() {
        // Balances far beyond f64's 53-bit integer range
        let a = 300_000_000 * ONE_TOKEN;
        let b = 700_000_000 * ONE_TOKEN;
        assert_eq!(weighted_histogram(&[a, b]), vec![30.0, 70.0]);
    }

    #[test]
    fn test_sum_near_100_for_many_options() {
        let weights = weighted_histogram(&[17, 23, 41, 5, 14]);
        let total: f64 = weights.iter().sum();
        assert!((total - 100.0).abs() <= weights.len() as f64 * 0.005 + 1e-9);
    }
}
