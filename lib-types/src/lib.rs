//! Analytics engine primitives.
//! Stable, presentation-neutral, behavior-free.
//!
//! Pure data types for the farm and governance analytics engine.
//! Behavior (calculation pipelines) lives in lib-farms and lib-governance.

pub mod config;
pub mod farm;
pub mod governance;
pub mod price;
pub mod primitives;

pub use primitives::{to_whole_units, Amount, BlockHeight, PoolId, STAKED_TOKEN_DECIMALS};

pub use config::{NetworkConfig, SECONDS_PER_DAY, SECONDS_PER_HOUR, TVL_FLOOR_USD};
pub use farm::{
    EmissionSchedule, FarmBoard, MergedFarm, PairInfo, Pool, Position, Reward, RoiProjection,
    TokenRef, Vault,
};
pub use governance::{DerivedProposal, Proposal, ProposalStatus};
pub use price::PriceTable;
