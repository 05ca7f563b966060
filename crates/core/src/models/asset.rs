use serde::{Deserialize, Serialize};

/// A tradable asset as reported by the market-data API.
///
/// This is an immutable snapshot: it is never mutated in place, only
/// superseded by a re-fetch. Numeric fields arrive as decimal strings on
/// the wire (CoinCap serializes everything as strings, and several fields
/// can be `null`), so they are kept as `Option<String>` and parsed on
/// demand via the accessor methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// API identifier, lowercase (e.g., "bitcoin")
    pub id: String,

    /// Ticker symbol (e.g., "BTC")
    pub symbol: String,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,

    /// Market rank ("1" = largest market cap)
    #[serde(default)]
    pub rank: Option<String>,

    /// Current price in USD, decimal string
    #[serde(rename = "priceUsd", default)]
    pub price_usd: Option<String>,

    /// Market capitalization in USD, decimal string
    #[serde(rename = "marketCapUsd", default)]
    pub market_cap_usd: Option<String>,

    /// Percent change over the last 24 hours, decimal string
    #[serde(rename = "changePercent24Hr", default)]
    pub change_percent_24hr: Option<String>,

    /// Circulating supply, decimal string
    #[serde(default)]
    pub supply: Option<String>,

    /// Maximum supply, decimal string (null for uncapped assets)
    #[serde(rename = "maxSupply", default)]
    pub max_supply: Option<String>,
}

impl Asset {
    /// Current USD price parsed to a float, or `None` if the API
    /// returned no price or an unparseable one.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        parse_decimal(self.price_usd.as_deref())
    }

    /// Market capitalization in USD as a float.
    #[must_use]
    pub fn market_cap(&self) -> Option<f64> {
        parse_decimal(self.market_cap_usd.as_deref())
    }

    /// 24-hour percent change as a float.
    #[must_use]
    pub fn change_percent(&self) -> Option<f64> {
        parse_decimal(self.change_percent_24hr.as_deref())
    }

    /// Market rank as a number.
    #[must_use]
    pub fn rank_number(&self) -> Option<u32> {
        self.rank.as_deref()?.trim().parse().ok()
    }

    /// URL of the asset's logo on the CoinCap CDN.
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!(
            "https://assets.coincap.io/assets/icons/{}@2x.png",
            self.symbol.to_lowercase()
        )
    }
}

pub(crate) fn parse_decimal(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse().ok()
}

/// Sort order for asset listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSortOrder {
    /// Highest USD price first
    PriceDesc,
    /// Lowest USD price first
    PriceAsc,
    /// Largest market cap first
    MarketCapDesc,
    /// Smallest market cap first
    MarketCapAsc,
    /// Biggest 24h gain first
    ChangeDesc,
    /// Biggest 24h loss first
    ChangeAsc,
}

/// Sort a fetched asset page in place.
///
/// Assets with a missing or unparseable value for the sort field go last
/// regardless of direction.
pub fn sort_assets(assets: &mut [Asset], order: AssetSortOrder) {
    use AssetSortOrder::*;

    let key = |a: &Asset| -> Option<f64> {
        match order {
            PriceDesc | PriceAsc => a.price(),
            MarketCapDesc | MarketCapAsc => a.market_cap(),
            ChangeDesc | ChangeAsc => a.change_percent(),
        }
    };
    let descending = matches!(order, PriceDesc | MarketCapDesc | ChangeDesc);

    assets.sort_by(|a, b| match (key(a), key(b)) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
