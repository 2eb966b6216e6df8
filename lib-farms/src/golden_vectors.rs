//! Golden Vector Tests for the Farm Pipeline
//!
//! These tests define EXACT expected values for specific inputs. If any of
//! these fail, a yield figure shown to users has changed: make sure the
//! change is intentional before updating the vector.

#[cfg(test)]
mod tests {
    use crate::rewards::reward_per_block;
    use crate::roi::project_roi;
    use lib_types::{EmissionSchedule, NetworkConfig, Reward};

    fn config_with_block_time(block_time: f64) -> NetworkConfig {
        NetworkConfig::new(
            block_time,
            "SPARK",
            "0x1000000000000000000000000000000000000001",
            "COIN",
            "0x2000000000000000000000000000000000000002",
            [],
        )
    }

    // =========================================================================
    // GOLDEN VECTOR: half-share emission
    // =========================================================================

    /// 50 of 100 allocation points, 2 tokens/s emission, 5 s blocks.
    ///
    /// reward_per_block = (50 / 100) × 2 × 5 = 5 tokens/block
    #[test]
    fn golden_half_share_emission() {
        let emission = EmissionSchedule {
            tokens_per_second: 2.0,
            total_alloc_point: 100,
        };
        let cfg = config_with_block_time(5.0);
        assert_eq!(reward_per_block(&emission, 50, &cfg), 5.0);
    }

    // =========================================================================
    // GOLDEN VECTOR: floored ROI on an empty pool
    // =========================================================================

    /// TVL = 0, one stream at 5 tokens/block priced $2.
    ///
    /// roi_per_block = (5 × 2) / 1000 = 0.01 (floor denominator)
    #[test]
    fn golden_floored_roi_on_zero_tvl() {
        let cfg = config_with_block_time(5.0);
        let rewards = [Reward {
            token: "SPARK".to_string(),
            reward_per_block: 5.0,
            reward_per_day: 5.0 * cfg.blocks_per_day(),
            reward_price: Some(2.0),
        }];
        let roi = project_roi(Some(0.0), &rewards, &cfg).unwrap();
        assert_eq!(roi.per_block, 0.01);
        // And the fixed multipliers on top of it
        assert_eq!(roi.per_hour, 0.01 * 720.0);
        assert_eq!(roi.per_day, 0.01 * 720.0 * 24.0);
        assert_eq!(roi.per_month, roi.per_day * 30.0);
        assert_eq!(roi.per_year, roi.per_day * 365.0);
    }
}
