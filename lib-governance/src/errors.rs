//! Governance Pipeline Errors

use thiserror::Error;

/// Error during proposal derivation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("Proposal {proposal_id}: histogram has {histogram_len} entries for {option_count} options")]
    HistogramLengthMismatch {
        proposal_id: String,
        histogram_len: usize,
        option_count: usize,
    },
}

/// Result type for governance derivation operations
pub type GovernanceResult<T> = Result<T, GovernanceError>;
