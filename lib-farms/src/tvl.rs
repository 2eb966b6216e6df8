//! TVL Calculator
//!
//! Converts a pool's or vault's raw staked liquidity into a USD total value
//! locked, given the oracle price of the staked asset.

use lib_types::{to_whole_units, Amount};

/// USD value of a raw 18-decimal staked amount.
///
/// `None` price means "not yet available" and yields `None`, never zero or
/// NaN: callers must exclude unavailable values from totals rather than
/// render them as $0. A zero amount with a known price is simply `Some(0.0)`.
pub fn staked_value_usd(amount: Amount, usd_price: Option<f64>) -> Option<f64> {
    let price = usd_price?;
    Some(to_whole_units(amount) * price)
}
