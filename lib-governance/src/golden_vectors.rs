//! Golden Vector Tests for Vote-Weight Normalization
//!
//! Exact expected percentage rows for specific histograms. A failing vector
//! means the numbers rendered next to every vote option have changed.

#[cfg(test)]
mod tests {
    use crate::weights::weighted_histogram;

    /// Nobody voted: every option shows 0%, not an even split.
    #[test]
    fn golden_all_zero_histogram() {
        assert_eq!(weighted_histogram(&[0, 0, 0]), vec![0.0, 0.0, 0.0]);
    }

    /// 30/70 vote split renders as exactly 30.00% / 70.00%.
    #[test]
    fn golden_thirty_seventy_split() {
        assert_eq!(weighted_histogram(&[30, 70]), vec![30.0, 70.0]);
    }
}
