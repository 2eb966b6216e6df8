//! Farm & Vault Valuation Pipeline
//!
//! Pure, synchronous derivation of display-ready farm records from chain and
//! price snapshots.
//!
//! # Design Principles
//!
//! 1. **Pure functions** - No ambient state; the price snapshot and network
//!    configuration are threaded into every call
//! 2. **Recompute from scratch** - Each pass rebuilds every derived record;
//!    nothing is mutated incrementally and source records stay untouched
//! 3. **Absence over exceptions** - Missing prices propagate as `None`
//!    fields, never as errors, zeros or NaN; one incomplete farm never
//!    blocks the rest of the list
//! 4. **Guarded division** - Zero total allocation points and sub-floor TVL
//!    are explicit branches, so no Infinity/NaN can corrupt sort order
//!
//! # Usage
//!
//! ```ignore
//! use lib_farms::{derive_farms, FarmFilter, filter_and_search};
//!
//! let board = derive_farms(&pools, &vaults, &prices, &positions, &emission, &cfg)?;
//! let filter = FarmFilter::from_key("my", &cfg);
//! let visible = filter_and_search(&board.farms, filter, "spark", &cfg);
//! ```

pub mod errors;
pub mod filter;
pub mod merge;
pub mod rewards;
pub mod roi;
pub mod tvl;

#[cfg(test)]
mod golden_vectors;

pub use errors::{EngineError, EngineResult};
pub use filter::{filter_and_search, filter_farms, search_farms, FarmFilter};
pub use merge::derive_farms;
pub use rewards::{platform_reward_stream, reward_per_block, reward_per_day};
pub use roi::{annual_roi_exceeds_display_cap, effective_tvl, project_roi, ANNUAL_ROI_DISPLAY_CAP};
pub use tvl::staked_value_usd;
