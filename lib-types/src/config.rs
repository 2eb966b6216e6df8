//! Per-network configuration tables
//!
//! The engine never derives these values; they are externally supplied
//! lookup tables, one per supported network. A single `NetworkConfig`
//! snapshot is threaded through every calculator call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Seconds in an hour, used for block-rate projections
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Seconds in a day, used for block-rate projections
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// USD floor substituted for near-zero TVL in ROI projections.
///
/// Dividing reward value by a tiny TVL would produce astronomically large,
/// meaningless yield figures; the floor keeps them capped and finite.
pub const TVL_FLOOR_USD: f64 = 1_000.0;

/// Static per-network parameters consumed by the pipelines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Average seconds per block on this network
    pub average_block_time_secs: f64,
    /// TVL floor applied by the ROI projector (USD)
    pub tvl_floor_usd: f64,
    /// Oracle symbol of the platform reward token
    pub platform_token_symbol: String,
    /// On-chain address of the platform reward token
    pub platform_token_address: String,
    /// Oracle symbol of the native asset
    pub native_symbol: String,
    /// On-chain address of the wrapped native asset
    pub wrapped_native_address: String,
    /// Symbols recognized as stablecoins by the pair filter
    pub stable_symbols: BTreeSet<String>,
}

impl NetworkConfig {
    /// Create a network configuration with the standard TVL floor
    pub fn new(
        average_block_time_secs: f64,
        platform_token_symbol: impl Into<String>,
        platform_token_address: impl Into<String>,
        native_symbol: impl Into<String>,
        wrapped_native_address: impl Into<String>,
        stable_symbols: impl IntoIterator<Item = String>,
    ) -> Self {
        NetworkConfig {
            average_block_time_secs,
            tvl_floor_usd: TVL_FLOOR_USD,
            platform_token_symbol: platform_token_symbol.into(),
            platform_token_address: platform_token_address.into(),
            native_symbol: native_symbol.into(),
            wrapped_native_address: wrapped_native_address.into(),
            stable_symbols: stable_symbols.into_iter().collect(),
        }
    }

    /// Blocks produced per hour at the configured block time
    pub fn blocks_per_hour(&self) -> f64 {
        SECONDS_PER_HOUR / self.average_block_time_secs
    }

    /// Blocks produced per day at the configured block time
    pub fn blocks_per_day(&self) -> f64 {
        SECONDS_PER_DAY / self.average_block_time_secs
    }

    /// Whether a token symbol belongs to the configured stablecoin set
    pub fn is_stable_symbol(&self, symbol: &str) -> bool {
        self.stable_symbols.contains(symbol)
    }
}
