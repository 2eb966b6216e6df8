//! Proposal derivation
//!
//! Combines status, status text and the normalized vote distribution into
//! one display-ready record per proposal. Like the farm pipeline, this is a
//! full recomputation over the latest snapshots: a new block number or a
//! fresh vote histogram rebuilds the derived list from scratch.

use lib_types::{BlockHeight, DerivedProposal, NetworkConfig, Proposal};

use crate::errors::{GovernanceError, GovernanceResult};
use crate::status::{proposal_status, status_text};
use crate::weights::weighted_histogram;

/// Derive the display record for one proposal.
///
/// The histogram must carry exactly one entry per option; a mismatched
/// voting-API response is rejected rather than zipped short.
pub fn derive_proposal(
    proposal: &Proposal,
    current_block: BlockHeight,
    cfg: &NetworkConfig,
) -> GovernanceResult<DerivedProposal> {
    if proposal.histogram.len() != proposal.options.len() {
        return Err(GovernanceError::HistogramLengthMismatch {
            proposal_id: proposal.id.clone(),
            histogram_len: proposal.histogram.len(),
            option_count: proposal.options.len(),
        });
    }
    Ok(DerivedProposal {
        status: proposal_status(proposal.end_block, current_block),
        status_text: status_text(proposal.end_block, current_block, cfg),
        weighted_histogram: weighted_histogram(&proposal.histogram),
        proposal: proposal.clone(),
    })
}

/// Derive display records for a whole proposal list
pub fn derive_proposals(
    proposals: &[Proposal],
    current_block: BlockHeight,
    cfg: &NetworkConfig,
) -> GovernanceResult<Vec<DerivedProposal>> {
    tracing::debug!(
        proposals = proposals.len(),
        current_block,
        "deriving proposal list"
    );
    proposals
        .iter()
        .map(|proposal| derive_proposal(proposal, current_block, cfg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_types::ProposalStatus;

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

    fn proposal(id: &str, histogram: Vec<u128>, end_block: u64) -> Proposal {
        Proposal {
            id: id.to_string(),
            title: format!("Proposal {id}"),
            options: histogram.iter().map(|_| "option".to_string()).collect(),
            histogram,
            start_block: 0,
            end_block,
        }
    }

    #[test]
    fn test_derives_status_and_weights() {
        let cfg = test_config();
        let derived = derive_proposal(&proposal("p1", vec![30, 70], 2_000), 1_000, &cfg).unwrap();
        assert_eq!(derived.status, ProposalStatus::Active);
        assert!(derived.status_text.ends_with("left"));
        assert_eq!(derived.weighted_histogram, vec![30.0, 70.0]);
    }

    #[test]
    fn test_source_proposal_is_untouched() {
        let cfg = test_config();
        let source = proposal("p1", vec![10, 20], 2_000);
        let derived = derive_proposal(&source, 1_000, &cfg).unwrap();
        assert_eq!(derived.proposal, source);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let cfg = test_config();
        let mut bad = proposal("p1", vec![30, 70], 2_000);
        bad.options.pop();
        let err = derive_proposal(&bad, 1_000, &cfg).unwrap_err();
        assert_eq!(
            err,
            GovernanceError::HistogramLengthMismatch {
                proposal_id: "p1".to_string(),
                histogram_len: 2,
                option_count: 1,
            }
        );
    }

    #[test]
    fn test_empty_list_derives_empty() {
        let cfg = test_config();
        assert!(derive_proposals(&[], 1_000, &cfg).unwrap().is_empty());
    }
}
