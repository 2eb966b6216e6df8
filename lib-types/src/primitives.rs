//! Canonical primitive types shared by the analytics pipelines
//!
//! These aliases are the foundational building blocks for all engine inputs
//! and derived records. They are designed to be:
//! - Deterministically serializable
//! - Efficient to copy and compare

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Block height on the indexed chain (0-indexed)
pub type BlockHeight = u64;

/// Raw on-chain token amounts in 18-decimal fixed point
pub type Amount = u128;

/// Numeric pool index assigned by the reward distributor contract
pub type PoolId = u64;

// ============================================================================
// FIXED-POINT CONVERSION
// ============================================================================

/// Fractional decimal digits carried by every raw staked/reward amount
pub const STAKED_TOKEN_DECIMALS: u32 = 18;

/// Convert a raw 18-decimal fixed-point amount into whole token units.
///
/// Precision loss above 2^53 whole units is acceptable: the result feeds
/// USD valuations, not accounting.
pub fn to_whole_units(amount: Amount) -> f64 {
    amount as f64 / 10f64.powi(STAKED_TOKEN_DECIMALS as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount_is_zero_units() {
        assert_eq!(to_whole_units(0), 0.0);
    }

    #[test]
    fn test_one_token() {
        assert_eq!(to_whole_units(1_000_000_000_000_000_000), 1.0);
    }

    #[test]
    fn test_fractional_amount() {
        assert_eq!(to_whole_units(500_000_000_000_000_000), 0.5);
    }
}
