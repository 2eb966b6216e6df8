//! Governance Proposal Pipeline
//!
//! Derives display-ready proposal records: open/closed status, humanized
//! remaining/elapsed time and the percentage vote distribution.
//!
//! # Key Principles
//!
//! 1. **Exact vote sums**: histogram totals are summed in integer
//!    arithmetic; large vote weights never lose precision in a float
//! 2. **Zero means zero**: an all-zero histogram yields all-zero
//!    percentages, not NaN and not an even split
//! 3. **Independent rounding**: each percentage is rounded to two decimals
//!    on its own; the row may not sum to exactly 100.00 and that drift is
//!    accepted, not corrected
//!
//! # Usage
//!
//! ```ignore
//! use lib_governance::{derive_proposals, ProposalFilter, filter_and_search};
//!
//! let derived = derive_proposals(&proposals, current_block, &cfg)?;
//! let filter = ProposalFilter::from_key("active");
//! let visible = filter_and_search(&derived, filter, "emission", current_block);
//! ```

pub mod derive;
pub mod errors;
pub mod filter;
pub mod status;
pub mod weights;

#[cfg(test)]
mod golden_vectors;

pub use derive::{derive_proposal, derive_proposals};
pub use errors::{GovernanceError, GovernanceResult};
pub use filter::{filter_and_search, filter_proposals, search_proposals, ProposalFilter};
pub use status::{proposal_status, status_text};
pub use weights::weighted_histogram;
