//! Proposal filter & search
//!
//! Active/past predicate filters plus fuzzy search over proposal titles and
//! identifiers. Unknown filter keys fall back to the identity filter, the
//! same deliberate behavior as the farm list.

use serde::{Deserialize, Serialize};

use lib_types::{BlockHeight, DerivedProposal};

/// Minimum normalized similarity for a fuzzy search hit
pub const SEARCH_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Named proposal filters
///
/// `Active` and `Past` use strict comparisons in both directions, so a
/// proposal observed exactly at its end block passes neither; that gap is
/// long-standing list behavior and is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalFilter {
    /// Voting still open (end block strictly ahead of the current block)
    Active,
    /// Voting over (end block strictly behind the current block)
    Past,
    /// Identity: passes every proposal through unchanged
    Any,
}

impl ProposalFilter {
    /// Map a free-form filter key; unrecognized keys are the identity filter
    pub fn from_key(key: &str) -> Self {
        match key {
            "active" => ProposalFilter::Active,
            "past" => ProposalFilter::Past,
            _ => ProposalFilter::Any,
        }
    }

    /// Whether a derived proposal passes this filter
    pub fn matches(&self, proposal: &DerivedProposal, current_block: BlockHeight) -> bool {
        match self {
            ProposalFilter::Active => proposal.proposal.end_block > current_block,
            ProposalFilter::Past => proposal.proposal.end_block < current_block,
            ProposalFilter::Any => true,
        }
    }
}

/// Apply a named filter to the derived proposal list
pub fn filter_proposals(
    proposals: &[DerivedProposal],
    filter: ProposalFilter,
    current_block: BlockHeight,
) -> Vec<DerivedProposal> {
    proposals
        .iter()
        .filter(|proposal| filter.matches(proposal, current_block))
        .cloned()
        .collect()
}

/// Fuzzy-search derived proposals by title and identifier.
///
/// An empty or whitespace-only term returns the input unchanged.
pub fn search_proposals(proposals: &[DerivedProposal], term: &str) -> Vec<DerivedProposal> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return proposals.to_vec();
    }
    proposals
        .iter()
        .filter(|p| fuzzy_match(&p.proposal.title, &term) || fuzzy_match(&p.proposal.id, &term))
        .cloned()
        .collect()
}

/// Filter, then search: the composed presentation-facing operation
pub fn filter_and_search(
    proposals: &[DerivedProposal],
    filter: ProposalFilter,
    term: &str,
    current_block: BlockHeight,
) -> Vec<DerivedProposal> {
    let filtered = filter_proposals(proposals, filter, current_block);
    search_proposals(&filtered, term)
}

/// Substring hit or normalized-Levenshtein similarity above the threshold
fn fuzzy_match(field: &str, lowercase_term: &str) -> bool {
    let field = field.to_lowercase();
    if field.contains(lowercase_term) {
        return true;
    }
    strsim::normalized_levenshtein(&field, lowercase_term) >= SEARCH_SIMILARITY_THRESHOLD
}
