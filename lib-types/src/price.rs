//! Price oracle snapshot
//!
//! A flat symbol → USD price mapping refreshed by an external poller.
//! The engine treats one `PriceTable` value as an immutable snapshot for a
//! whole computation pass: every derived figure in a single pass reads the
//! same table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// USD price per known asset symbol
///
/// Missing symbols resolve to `None` ("price unavailable"), which the
/// calculators propagate as not-computed rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    /// Create an empty price snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the USD price for a symbol
    pub fn insert(&mut self, symbol: impl Into<String>, usd_price: f64) {
        self.prices.insert(symbol.into(), usd_price);
    }

    /// USD price for a symbol, `None` when the oracle has not supplied one
    pub fn price(&self, symbol: &str) -> Option<f64> {
        self.prices.get(symbol).copied()
    }

    /// Number of quoted symbols in this snapshot
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the snapshot carries no quotes at all
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(String, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        PriceTable {
            prices: iter.into_iter().collect(),
        }
    }
}
