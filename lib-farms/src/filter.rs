//! Filter & Search Layer
//!
//! Named predicate filters plus fuzzy text search over merged farm records.
//! Filter keys arrive as free-form query strings from the router; unknown
//! keys deliberately fall back to the identity filter instead of erroring.

use serde::{Deserialize, Serialize};

use lib_types::{MergedFarm, NetworkConfig, PairInfo};

/// Minimum normalized similarity for a fuzzy search hit
pub const SEARCH_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Named farm filters
///
/// A closed set of predicate kinds replaces free-form string keying, so a
/// typo in a filter key cannot silently select the wrong predicate: it maps
/// to `Any` via `from_key` and passes everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FarmFilter {
    /// Actively emitting pools (alloc_point > 0)
    All,
    /// Pools the caller has a non-zero stake in, excluding retired pools
    Mine,
    /// Pools pairing the platform token
    PlatformToken,
    /// Single-asset pools (no second pair token)
    SingleAsset,
    /// Pools pairing the wrapped native asset
    Native,
    /// Pools pairing a configured stablecoin
    Stables,
    /// Retired pools (alloc_point == 0)
    Past,
    /// Identity: passes every farm through unchanged
    Any,
}

impl FarmFilter {
    /// Map a free-form filter key to a filter kind.
    ///
    /// The platform-token and native keys are the network's token symbols
    /// (e.g. `?filter=spark`), matched case-insensitively. Unrecognized keys
    /// are the identity filter by design, not an error.
    pub fn from_key(key: &str, cfg: &NetworkConfig) -> Self {
        if key.eq_ignore_ascii_case(&cfg.platform_token_symbol) {
            return FarmFilter::PlatformToken;
        }
        if key.eq_ignore_ascii_case(&cfg.native_symbol) {
            return FarmFilter::Native;
        }
        match key {
            "all" => FarmFilter::All,
            "my" => FarmFilter::Mine,
            "single" => FarmFilter::SingleAsset,
            "stables" => FarmFilter::Stables,
            "past" => FarmFilter::Past,
            _ => FarmFilter::Any,
        }
    }

    /// Whether a merged farm passes this filter
    pub fn matches(&self, farm: &MergedFarm, cfg: &NetworkConfig) -> bool {
        match self {
            FarmFilter::All => farm.alloc_point > 0,
            FarmFilter::Mine => {
                let staked = farm
                    .position
                    .as_ref()
                    .map_or(false, |position| position.amount != 0);
                staked && farm.alloc_point != 0
            }
            FarmFilter::PlatformToken => {
                pair_has_address(&farm.pair, &cfg.platform_token_address)
            }
            FarmFilter::SingleAsset => farm.pair.token1.is_none(),
            FarmFilter::Native => pair_has_address(&farm.pair, &cfg.wrapped_native_address),
            FarmFilter::Stables => {
                cfg.is_stable_symbol(&farm.pair.token0.symbol)
                    || farm
                        .pair
                        .token1
                        .as_ref()
                        .map_or(false, |t| cfg.is_stable_symbol(&t.symbol))
            }
            FarmFilter::Past => farm.alloc_point == 0,
            FarmFilter::Any => true,
        }
    }
}

/// EVM addresses arrive in mixed case; compare case-insensitively
fn pair_has_address(pair: &PairInfo, address: &str) -> bool {
    pair.token0.address.eq_ignore_ascii_case(address)
        || pair
            .token1
            .as_ref()
            .map_or(false, |t| t.address.eq_ignore_ascii_case(address))
}

/// Apply a named filter to the merged farm list
pub fn filter_farms(farms: &[MergedFarm], filter: FarmFilter, cfg: &NetworkConfig) -> Vec<MergedFarm> {
    farms
        .iter()
        .filter(|farm| filter.matches(farm, cfg))
        .cloned()
        .collect()
}

/// Fuzzy-search merged farms by pair id, token symbols and token names.
///
/// An empty or whitespace-only term returns the input unchanged.
pub fn search_farms(farms: &[MergedFarm], term: &str) -> Vec<MergedFarm> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return farms.to_vec();
    }
    farms
        .iter()
        .filter(|farm| {
            searchable_fields(farm)
                .iter()
                .any(|field| fuzzy_match(field, &term))
        })
        .cloned()
        .collect()
}

/// Filter, then search: the composed presentation-facing operation
pub fn filter_and_search(
    farms: &[MergedFarm],
    filter: FarmFilter,
    term: &str,
    cfg: &NetworkConfig,
) -> Vec<MergedFarm> {
    let filtered = filter_farms(farms, filter, cfg);
    search_farms(&filtered, term)
}

fn searchable_fields(farm: &MergedFarm) -> Vec<&str> {
    let mut fields = vec![
        farm.pair.lp_token.as_str(),
        farm.pair.token0.symbol.as_str(),
        farm.pair.token0.name.as_str(),
    ];
    if let Some(token1) = &farm.pair.token1 {
        fields.push(token1.symbol.as_str());
        fields.push(token1.name.as_str());
    }
    fields
}

/// Substring hit or normalized-Levenshtein similarity above the threshold
fn fuzzy_match(field: &str, lowercase_term: &str) -> bool {
    let field = field.to_lowercase();
    if field.contains(lowercase_term) {
        return true;
    }
    strsim::normalized_levenshtein(&field, lowercase_term) >= SEARCH_SIMILARITY_THRESHOLD
}
