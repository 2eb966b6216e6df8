//! APY/ROI Projector
//!
//! Combines a farm's TVL and reward streams into yield rates at five time
//! horizons. Pools with near-zero liquidity are projected against a USD
//! floor instead of their actual TVL, so the figures stay finite.

use lib_types::{NetworkConfig, Reward, RoiProjection};

/// Annual rates above this multiple are rendered as a capped sentinel by the
/// presentation layer. A display policy, not a computation error; stated
/// here so every consumer caps at the same point.
pub const ANNUAL_ROI_DISPLAY_CAP: f64 = 1_000_000.0;

/// TVL actually used as the ROI denominator.
///
/// Values under the floor (including zero) are replaced by the floor itself;
/// values at or above it pass through exactly.
pub fn effective_tvl(tvl_usd: f64, floor_usd: f64) -> f64 {
    if tvl_usd >= floor_usd {
        tvl_usd
    } else {
        floor_usd
    }
}

/// Project yield rates from TVL and reward streams.
///
/// `per_block = Σ(reward_per_block × reward_price) / effective_tvl`, then
/// fixed multipliers take it to hour/day/month/year. Returns `None` while
/// the TVL or any reward stream's price is unavailable; the projection is
/// either complete and internally consistent or absent.
pub fn project_roi(
    tvl_usd: Option<f64>,
    rewards: &[Reward],
    cfg: &NetworkConfig,
) -> Option<RoiProjection> {
    let tvl = tvl_usd?;

    let mut reward_usd_per_block = 0.0;
    for reward in rewards {
        reward_usd_per_block += reward.reward_per_block * reward.reward_price?;
    }

    let per_block = reward_usd_per_block / effective_tvl(tvl, cfg.tvl_floor_usd);
    let per_hour = per_block * cfg.blocks_per_hour();
    let per_day = per_hour * 24.0;
    Some(RoiProjection {
        per_block,
        per_hour,
        per_day,
        per_month: per_day * 30.0,
        per_year: per_day * 365.0,
    })
}

/// Whether an annual rate falls under the presentation clamp
pub fn annual_roi_exceeds_display_cap(roi_per_year: f64) -> bool {
    roi_per_year > ANNUAL_ROI_DISPLAY_CAP
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> NetworkConfig {
        NetworkConfig::new(
            5.0,
            "SPARK",
            "0x1000000000000000000000000000000000000001",
            "COIN",
            "0x2000000000000000000000000000000000000002",
            [],
        )
    }

    fn stream(reward_per_block: f64, reward_price: Option<f64>) -> Reward {
        Reward {
            token: "SPARK".to_string(),
            reward_per_block,
            reward_per_day: 0.0,
            reward_price,
        }
    }

    // ===== FLOOR POLICY =====

    #[test]
    fn test_floor_applied_below_threshold() {
        assert_eq!(effective_tvl(0.0, 1_000.0), 1_000.0);
        assert_eq!(effective_tvl(999.99, 1_000.0), 1_000.0);
    }

    #[test]
    fn test_floor_not_applied_at_or_above_threshold() {
        assert_eq!(effective_tvl(1_000.0, 1_000.0), 1_000.0);
        assert_eq!(effective_tvl(250_000.0, 1_000.0), 250_000.0);
    }

    // ===== PROJECTION =====

    #[test]
    fn test_zero_tvl_projects_against_floor() {
        let cfg = test_config();
        let roi = project_roi(Some(0.0), &[stream(5.0, Some(2.0))], &cfg).unwrap();
        // (5 × $2) / $1000 floor
        assert_eq!(roi.per_block, 0.01);
        assert!(roi.per_block.is_finite());
    }

    #[test]
    fn test_horizons_stay_consistent() {
        let cfg = test_config();
        let roi = project_roi(Some(50_000.0), &[stream(5.0, Some(2.0))], &cfg).unwrap();
        assert_eq!(roi.per_hour, roi.per_block * cfg.blocks_per_hour());
        assert_eq!(roi.per_day, roi.per_hour * 24.0);
        assert_eq!(roi.per_month, roi.per_day * 30.0);
        assert_eq!(roi.per_year, roi.per_day * 365.0);
    }

    #[test]
    fn test_multiple_streams_sum() {
        let cfg = test_config();
        let streams = [stream(5.0, Some(2.0)), stream(1.0, Some(10.0))];
        let roi = project_roi(Some(2_000.0), &streams, &cfg).unwrap();
        // ($10 + $10) / $2000
        assert_eq!(roi.per_block, 0.01);
    }

    // ===== ABSENCE PROPAGATION =====

    #[test]
    fn test_unknown_tvl_yields_no_projection() {
        let cfg = test_config();
        assert_eq!(project_roi(None, &[stream(5.0, Some(2.0))], &cfg), None);
    }

    #[test]
    fn test_unpriced_stream_yields_no_projection() {
        let cfg = test_config();
        let streams = [stream(5.0, Some(2.0)), stream(1.0, None)];
        assert_eq!(project_roi(Some(2_000.0), &streams, &cfg), None);
    }

    // ===== DISPLAY CAP =====

    #[test]
    fn test_display_cap_boundary() {
        assert!(!annual_roi_exceeds_display_cap(1_000_000.0));
        assert!(annual_roi_exceeds_display_cap(1_000_000.5));
    }
}
