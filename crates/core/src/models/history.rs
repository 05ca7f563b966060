use serde::{Deserialize, Serialize};

use super::asset::parse_decimal;

/// A single historical price point for an asset.
///
/// Immutable once fetched. The API returns points ordered by time over
/// the requested window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Price in USD, decimal string
    #[serde(rename = "priceUsd")]
    pub price_usd: String,

    /// Unix timestamp in milliseconds
    pub time: i64,
}

impl HistoryPoint {
    /// Price parsed to a float, or `None` if unparseable.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        parse_decimal(Some(self.price_usd.as_str()))
    }
}

/// User-selected time-window granularity for historical price queries.
///
/// Each interval maps to a coarser provider-side bucket size and to the
/// look-back window the chart covers. The serialized form (`h1` / `h12` /
/// `d1`) doubles as the cache-key segment, so switching intervals never
/// serves a mismatched cache entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// Last hour, finest buckets
    H1,
    /// Last 12 hours, medium buckets
    H12,
    /// Last day (default view), coarse buckets
    #[default]
    D1,
}

impl Interval {
    /// The bucket size passed to the provider's history endpoint.
    #[must_use]
    pub fn provider_bucket(&self) -> &'static str {
        match self {
            Interval::H1 => "m1",
            Interval::H12 => "m5",
            Interval::D1 => "m30",
        }
    }

    /// Length of the look-back window in milliseconds.
    #[must_use]
    pub fn window_millis(&self) -> i64 {
        match self {
            Interval::H1 => 3_600_000,
            Interval::H12 => 43_200_000,
            Interval::D1 => 86_400_000,
        }
    }

    /// All intervals in display order.
    #[must_use]
    pub fn all() -> [Interval; 3] {
        [Interval::H1, Interval::H12, Interval::D1]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interval::H1 => write!(f, "h1"),
            Interval::H12 => write!(f, "h12"),
            Interval::D1 => write!(f, "d1"),
        }
    }
}

impl std::str::FromStr for Interval {
    type Err = crate::errors::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h1" => Ok(Interval::H1),
            "h12" => Ok(Interval::H12),
            "d1" => Ok(Interval::D1),
            other => Err(crate::errors::CoreError::ValidationError(format!(
                "Unknown interval '{other}' (expected h1, h12, or d1)"
            ))),
        }
    }
}
