//! Farm/Vault Merger
//!
//! Joins chain records, the price snapshot and the caller's positions into
//! denormalized `MergedFarm` records plus board-level aggregates. The single
//! entry point of the pipeline: the surrounding application calls
//! `derive_farms` whenever any input snapshot changes and swaps in the new
//! board wholesale.

use lib_types::{
    to_whole_units, EmissionSchedule, FarmBoard, MergedFarm, NetworkConfig, Pool, Position,
    PriceTable, Vault,
};

use crate::errors::{EngineError, EngineResult};
use crate::rewards::platform_reward_stream;
use crate::roi::project_roi;
use crate::tvl::staked_value_usd;

/// Decimals fixed on the merged pair metadata
const MERGED_PAIR_DECIMALS: u8 = 18;

/// Derive the full farm board from one consistent set of input snapshots.
///
/// Pure and synchronous: same snapshots, same board. Per pool this computes
/// TVL, the reward stream list and the ROI projection, and attaches the
/// caller's position by pool id. Farms come back sorted descending by
/// allocation points; the sort is stable, so ties retain input order.
/// Vaults are not merged per item - they are summed into one USD total.
///
/// Empty input lists produce an empty board, never an error. The only error
/// is a pool with negative allocation points, which the indexer must never
/// produce and the filters cannot classify.
pub fn derive_farms(
    pools: &[Pool],
    vaults: &[Vault],
    prices: &PriceTable,
    positions: &[Position],
    emission: &EmissionSchedule,
    cfg: &NetworkConfig,
) -> EngineResult<FarmBoard> {
    tracing::debug!(
        pools = pools.len(),
        vaults = vaults.len(),
        positions = positions.len(),
        quoted_symbols = prices.len(),
        "deriving farm board"
    );

    for pool in pools {
        if pool.alloc_point < 0 {
            return Err(EngineError::NegativeAllocPoint {
                pool_id: pool.id,
                alloc_point: pool.alloc_point,
            });
        }
    }

    let mut farms = Vec::with_capacity(pools.len());
    for pool in pools {
        let alloc_point = pool.alloc_point as u64;
        let tvl_usd = staked_value_usd(pool.total_staked, prices.price(&pool.lp_symbol));
        let rewards = vec![platform_reward_stream(emission, alloc_point, prices, cfg)];
        let roi = project_roi(tvl_usd, &rewards, cfg);
        let position = positions.iter().find(|p| p.pool_id == pool.id).cloned();

        let mut pair = pool.pair.clone();
        pair.decimals = MERGED_PAIR_DECIMALS;

        farms.push(MergedFarm {
            id: pool.id,
            pair,
            alloc_point,
            tvl_usd,
            rewards,
            roi,
            position,
            blocks_per_hour: cfg.blocks_per_hour(),
        });
    }

    // Higher-weighted pools first; stable, so ties keep input order
    farms.sort_by(|a, b| b.alloc_point.cmp(&a.alloc_point));

    let farm_tvl_usd: f64 = farms.iter().filter_map(|f| f.tvl_usd).sum();
    let platform_price = prices.price(&cfg.platform_token_symbol);
    let vault_tvl_usd = sum_vault_value(vaults, platform_price);
    let pending_rewards_usd = sum_pending_rewards(positions, platform_price);
    let staked_value_usd = sum_staked_value(positions, pools, prices);

    if platform_price.is_none() {
        tracing::debug!(
            token = %cfg.platform_token_symbol,
            "platform token price unavailable; vault and reward totals withheld"
        );
    }

    Ok(FarmBoard {
        farms,
        farm_tvl_usd,
        vault_tvl_usd,
        pending_rewards_usd,
        staked_value_usd,
    })
}

/// Summed USD value across all vaults.
///
/// Vaults hold the platform token, so one missing quote withholds the whole
/// total. No vaults means a known zero, not an unknown.
fn sum_vault_value(vaults: &[Vault], platform_price: Option<f64>) -> Option<f64> {
    if vaults.is_empty() {
        return Some(0.0);
    }
    let price = platform_price?;
    Some(
        vaults
            .iter()
            .map(|v| to_whole_units(v.total_staked) * price)
            .sum(),
    )
}

/// USD value of the caller's unclaimed platform-token rewards
fn sum_pending_rewards(positions: &[Position], platform_price: Option<f64>) -> Option<f64> {
    if positions.is_empty() {
        return Some(0.0);
    }
    let price = platform_price?;
    Some(
        positions
            .iter()
            .map(|p| to_whole_units(p.pending_reward) * price)
            .sum(),
    )
}

/// USD value of the caller's staked amounts.
///
/// Positions whose pool or staked-asset price is unknown are excluded from
/// the total rather than valued at zero.
fn sum_staked_value(positions: &[Position], pools: &[Pool], prices: &PriceTable) -> f64 {
    positions
        .iter()
        .filter_map(|position| {
            let pool = pools.iter().find(|pool| pool.id == position.pool_id)?;
            staked_value_usd(position.amount, prices.price(&pool.lp_symbol))
        })
        .sum()
}
