use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::history::{HistoryPoint, Interval};
use crate::models::price::PriceTable;
use crate::providers::traits::MarketDataProvider;
use crate::storage::session_cache::{SessionCache, CACHE_EXPIRY_MS};

/// Market-data reads with time-boxed caching.
///
/// Detail and history reads go through the session cache (5-minute
/// expiry); listings and buy-time quotes always hit the provider. The
/// caller supplies `now_ms` for cached reads, keeping the clock out of
/// this layer.
pub struct MarketService {
    provider: Box<dyn MarketDataProvider>,
    cache: SessionCache,
}

impl MarketService {
    pub fn new(provider: Box<dyn MarketDataProvider>, cache: SessionCache) -> Self {
        Self { provider, cache }
    }

    /// List a page of assets, optionally filtered by a search term.
    /// Not cached — every page/search change is a fresh read.
    pub async fn list_assets(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> Result<Vec<Asset>, CoreError> {
        self.provider.list_assets(limit, offset, search).await
    }

    /// Detail record for one asset, cached under `coin_{id}`.
    pub async fn asset_detail(&mut self, id: &str, now_ms: i64) -> Result<Asset, CoreError> {
        let key = format!("coin_{id}");
        let Self { provider, cache } = self;
        cache
            .get_or_fetch(&key, now_ms, CACHE_EXPIRY_MS, || provider.get_asset(id))
            .await
    }

    /// History for one asset over the interval's look-back window ending
    /// at `now_ms`, cached under `history_{id}_{interval}` so switching
    /// intervals never serves a mismatched entry.
    pub async fn asset_history(
        &mut self,
        id: &str,
        interval: Interval,
        now_ms: i64,
    ) -> Result<Vec<HistoryPoint>, CoreError> {
        let key = format!("history_{id}_{interval}");
        let start_ms = now_ms - interval.window_millis();
        let Self { provider, cache } = self;
        cache
            .get_or_fetch(&key, now_ms, CACHE_EXPIRY_MS, || {
                provider.get_asset_history(id, interval, start_ms, now_ms)
            })
            .await
    }

    /// Live quote for one asset. Always hits the provider — the buy flow
    /// records the price at confirmation time, never a cached one.
    pub async fn quote(&self, id: &str) -> Result<Asset, CoreError> {
        self.provider.get_asset(id).await
    }

    /// Build a price table for a set of asset ids.
    ///
    /// An individual failure is logged and skipped, leaving that id
    /// missing from the table (it values to zero downstream), so one dead
    /// asset never poisons the aggregate.
    pub async fn current_prices(&self, ids: &[&str]) -> PriceTable {
        let mut table = PriceTable::new();
        for id in ids {
            match self.provider.get_asset(id).await {
                Ok(asset) => match asset.price() {
                    Some(price) => table.insert(id, price),
                    None => log::warn!("No usable price for {id} in refresh"),
                },
                Err(e) => log::warn!("Price refresh failed for {id}: {e}"),
            }
        }
        table
    }
}

impl std::fmt::Debug for MarketService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketService")
            .field("provider", &self.provider.name())
            .finish_non_exhaustive()
    }
}
