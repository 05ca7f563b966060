use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single simulated purchase held in the portfolio.
///
/// **Identity**: lots carry no generated id. The composite
/// (`asset_id`, `purchased_at`) pair is the only handle used to target a
/// removal, so two buys of the same asset stamped with the same
/// millisecond would be removed together. No uniqueness check is
/// performed on insert.
///
/// Lots are never mutated after creation; they are destroyed only by an
/// explicit remove targeting the composite key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    /// API identifier of the purchased asset (e.g., "bitcoin")
    pub asset_id: String,

    /// Display name at purchase time (e.g., "Bitcoin")
    pub asset_name: String,

    /// Quantity purchased (always positive)
    pub quantity: f64,

    /// Price per unit in USD at purchase time
    pub purchase_price: f64,

    /// Purchase timestamp, RFC 3339 / ISO-8601 string
    pub purchased_at: String,
}

impl Lot {
    pub fn new(
        asset_id: impl Into<String>,
        asset_name: impl Into<String>,
        quantity: f64,
        purchase_price: f64,
        purchased_at: DateTime<Utc>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            asset_name: asset_name.into(),
            quantity,
            purchase_price,
            purchased_at: purchased_at.to_rfc3339(),
        }
    }

    /// Whether this lot matches the given composite removal key.
    #[must_use]
    pub fn matches(&self, asset_id: &str, purchased_at: &str) -> bool {
        self.asset_id == asset_id && self.purchased_at == purchased_at
    }

    /// Total amount paid for this lot (quantity × purchase price).
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.quantity * self.purchase_price
    }
}
