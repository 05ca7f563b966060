use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from a normalized asset identifier to its current USD price.
///
/// Keys are trimmed and lower-cased once, at the insert/lookup boundary,
/// so callers never have to care about the casing of the id they hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the price for an asset id.
    pub fn insert(&mut self, asset_id: &str, price: f64) {
        self.prices.insert(normalize(asset_id), price);
    }

    /// Look up the price for an asset id. Returns `None` when the id has
    /// no entry — the caller decides whether that means "zero" (valuation)
    /// or "unavailable" (display).
    #[must_use]
    pub fn get(&self, asset_id: &str) -> Option<f64> {
        self.prices.get(&normalize(asset_id)).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// All known asset ids, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.prices.keys().map(String::as_str).collect()
    }
}

fn normalize(asset_id: &str) -> String {
    asset_id.trim().to_lowercase()
}
