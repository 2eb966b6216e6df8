//! Governance proposal records
//!
//! Raw proposals arrive from the voting API; lib-governance derives status
//! and the percentage vote distribution per render pass.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::primitives::BlockHeight;

/// Raw governance proposal as served by the voting API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Proposal identifier
    pub id: String,
    /// Proposal title
    pub title: String,
    /// Option labels, one per votable choice
    pub options: Vec<String>,
    /// Raw vote-weight totals, one per option (same length as `options`)
    pub histogram: Vec<u128>,
    /// Block at which the vote snapshot was taken
    pub start_block: BlockHeight,
    /// Block at which voting closes
    pub end_block: BlockHeight,
}

/// Whether voting on a proposal is still open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Voting is open: the current block has not passed the end block
    Active,
    /// Voting ended: the current block is past the end block
    Closed,
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProposalStatus::Active => write!(f, "active"),
            ProposalStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Proposal with derived status and percentage vote distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedProposal {
    /// The raw proposal this was derived from
    pub proposal: Proposal,
    /// Open/closed voting status at the observed block
    pub status: ProposalStatus,
    /// Human-readable remaining/elapsed time ("2 hours left", "3 days ago")
    pub status_text: String,
    /// Percentage per option, two decimal places, same length as the
    /// histogram. Entries are rounded independently and may not sum to
    /// exactly 100.00; an all-zero histogram yields all-zero entries.
    pub weighted_histogram: Vec<f64>,
}
