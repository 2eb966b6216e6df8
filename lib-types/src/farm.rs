//! Farm, vault and position records
//!
//! Raw records arrive from the chain indexer exactly as deserialized; the
//! merged records are built from scratch by lib-farms on every input change
//! and never mutated incrementally. Source records stay untouched.

use serde::{Deserialize, Serialize};

use crate::primitives::{Amount, PoolId};

// ============================================================================
// RAW CHAIN RECORDS
// ============================================================================

/// Reference to one token of a pool's pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRef {
    /// On-chain token address
    pub address: String,
    /// Ticker symbol
    pub symbol: String,
    /// Human-readable token name
    pub name: String,
}

/// Pair metadata attached to a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairInfo {
    /// LP token address identifying the pair
    pub lp_token: String,
    /// First token of the pair
    pub token0: TokenRef,
    /// Second token; `None` for single-asset pools
    pub token1: Option<TokenRef>,
    /// Fractional decimal digits of the LP token
    pub decimals: u8,
}

/// Raw reward-distributor pool record from the indexer
///
/// `alloc_point` is signed on the wire; the engine rejects negative values
/// at the derivation boundary rather than guessing filter behavior for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    /// Numeric pool index
    pub id: PoolId,
    /// Pair metadata
    pub pair: PairInfo,
    /// Allocation-point weight determining this pool's emission share
    pub alloc_point: i64,
    /// Oracle symbol under which the staked asset is quoted
    pub lp_symbol: String,
    /// Total staked liquidity, raw 18-decimal fixed point
    pub total_staked: Amount,
}

/// Vault record: staked value only, no block-reward emission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    /// Vault identifier
    pub id: u64,
    /// Total staked platform tokens, raw 18-decimal fixed point
    pub total_staked: Amount,
}

/// A connected user's stake in one pool
///
/// Absent when no wallet is connected or the user never staked; refreshed
/// whenever chain state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Pool this position belongs to
    pub pool_id: PoolId,
    /// Staked amount, raw 18-decimal fixed point
    pub amount: Amount,
    /// Unclaimed reward amount, raw 18-decimal fixed point
    pub pending_reward: Amount,
}

/// Global emission parameters of the reward distributor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionSchedule {
    /// Platform tokens emitted per second, in whole token units
    pub tokens_per_second: f64,
    /// Sum of allocation points across all pools
    pub total_alloc_point: u64,
}

// ============================================================================
// DERIVED RECORDS
// ============================================================================

/// One reward stream of a farm
///
/// Current emission produces exactly one stream (the platform token), but
/// the merged record carries a list so concurrent streams need no remodel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    /// Reward token symbol
    pub token: String,
    /// Tokens rewarded per block
    pub reward_per_block: f64,
    /// Tokens rewarded per day (reward_per_block × blocks per day)
    pub reward_per_day: f64,
    /// USD price of the reward token, `None` while unavailable
    pub reward_price: Option<f64>,
}

/// Yield projection at the five supported horizons
///
/// All fields derive from `per_block` by fixed multipliers and are therefore
/// mutually consistent: per_hour = per_block × blocks per hour, per_day =
/// per_hour × 24, per_month = per_day × 30, per_year = per_day × 365.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub per_block: f64,
    pub per_hour: f64,
    pub per_day: f64,
    pub per_month: f64,
    pub per_year: f64,
}

/// Denormalized, display-ready farm record
///
/// Unit of the filter & search layer and of every farm view. Fields that
/// could not be computed from the current snapshots (missing prices) are
/// `None`, never zero: callers exclude them from totals instead of
/// rendering $0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedFarm {
    /// Pool identifier
    pub id: PoolId,
    /// Pair metadata, decimals fixed at 18 by the merger
    pub pair: PairInfo,
    /// Validated non-negative allocation points
    pub alloc_point: u64,
    /// USD total value locked, `None` while the staked-asset price is unknown
    pub tvl_usd: Option<f64>,
    /// Active reward streams
    pub rewards: Vec<Reward>,
    /// Yield projection, `None` while TVL or a reward price is unknown
    pub roi: Option<RoiProjection>,
    /// The caller's stake in this pool, if any
    pub position: Option<Position>,
    /// Blocks per hour on the active network, carried for display math
    pub blocks_per_hour: f64,
}

/// Full output of one farm derivation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmBoard {
    /// Merged farms, sorted descending by allocation points
    pub farms: Vec<MergedFarm>,
    /// Sum of the farm TVLs that could be valued (USD)
    pub farm_tvl_usd: f64,
    /// Summed USD value across all vaults; `None` while the platform-token
    /// price is unknown and at least one vault exists
    pub vault_tvl_usd: Option<f64>,
    /// USD value of the caller's unclaimed rewards across all positions;
    /// `None` while the platform-token price is unknown and positions exist
    pub pending_rewards_usd: Option<f64>,
    /// USD value of the caller's staked amounts that could be valued
    pub staked_value_usd: f64,
}
