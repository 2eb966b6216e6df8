//! Reward Rate Calculator
//!
//! Converts the distributor's global emission parameters into per-pool
//! reward rates, projected across time units with the network's fixed
//! block-time constant.

use lib_types::{EmissionSchedule, NetworkConfig, PriceTable, Reward};

/// Platform tokens rewarded to a pool per block.
///
/// `(pool_alloc / total_alloc) × tokens_per_second × seconds_per_block`.
/// A distributor with zero total allocation points emits nothing; the zero
/// check keeps the share out of `0 / 0` territory.
pub fn reward_per_block(
    emission: &EmissionSchedule,
    pool_alloc_point: u64,
    cfg: &NetworkConfig,
) -> f64 {
    if emission.total_alloc_point == 0 {
        return 0.0;
    }
    let share = pool_alloc_point as f64 / emission.total_alloc_point as f64;
    share * emission.tokens_per_second * cfg.average_block_time_secs
}

/// Project a per-block reward rate to a full day
pub fn reward_per_day(reward_per_block: f64, cfg: &NetworkConfig) -> f64 {
    reward_per_block * cfg.blocks_per_day()
}

/// Build the platform-token reward stream for one pool.
///
/// Current emission has exactly one concurrent stream; the merged farm still
/// carries a list so additional streams slot in without remodeling.
pub fn platform_reward_stream(
    emission: &EmissionSchedule,
    pool_alloc_point: u64,
    prices: &PriceTable,
    cfg: &NetworkConfig,
) -> Reward {
    let per_block = reward_per_block(emission, pool_alloc_point, cfg);
    Reward {
        token: cfg.platform_token_symbol.clone(),
        reward_per_block: per_block,
        reward_per_day: reward_per_day(per_block, cfg),
        reward_price: prices.price(&cfg.platform_token_symbol),
    }
}
