pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use chrono::Utc;

use errors::CoreError;
use models::{
    asset::{sort_assets, Asset, AssetSortOrder},
    history::{HistoryPoint, Interval},
    lot::Lot,
    price::PriceTable,
    valuation::PortfolioValuation,
};
use providers::{coincap::CoinCapProvider, traits::MarketDataProvider};
use services::{market_service::MarketService, valuation_service::ValuationService};
use storage::{
    backend::{MemoryBackend, StorageBackend},
    portfolio_store::PortfolioStore,
    session_cache::SessionCache,
};

/// Main entry point for the Coin Dashboard core library.
///
/// Wires the market-data provider, the durable portfolio store, the
/// session cache, and the valuation engine behind one object a frontend
/// can drive. All state the dashboard owns lives in the injected storage
/// backends; market data is read-only and fetched on demand.
#[must_use]
pub struct CoinDashboard {
    market: MarketService,
    portfolio: PortfolioStore,
    valuation_service: ValuationService,
}

impl std::fmt::Debug for CoinDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinDashboard")
            .field("lots", &self.portfolio.list().len())
            .field("market", &self.market)
            .finish()
    }
}

impl CoinDashboard {
    /// Build a dashboard from an explicit provider and storage backends.
    ///
    /// `durable` holds the portfolio (survives restarts in real
    /// deployments); `session` holds cache envelopes (scoped to one run).
    pub fn new(
        provider: Box<dyn MarketDataProvider>,
        durable: Box<dyn StorageBackend>,
        session: Box<dyn StorageBackend>,
    ) -> Self {
        Self {
            market: MarketService::new(provider, SessionCache::new(session)),
            portfolio: PortfolioStore::new(durable),
            valuation_service: ValuationService::new(),
        }
    }

    /// Dashboard against the live CoinCap API with purely in-memory
    /// storage. Nothing survives the instance.
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(CoinCapProvider::new()),
            Box::new(MemoryBackend::new()),
            Box::new(MemoryBackend::new()),
        )
    }

    /// Dashboard against the live CoinCap API with the portfolio persisted
    /// to a JSON file at `path` and a fresh in-memory session cache.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(
            Box::new(CoinCapProvider::new()),
            Box::new(storage::backend::FileBackend::open(path)),
            Box::new(MemoryBackend::new()),
        )
    }

    // ── Market Data ─────────────────────────────────────────────────

    /// List a page of tradable assets, optionally filtered by a search
    /// term. Always a fresh read.
    pub async fn list_assets(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> Result<Vec<Asset>, CoreError> {
        self.market.list_assets(limit, offset, search).await
    }

    /// Like [`list_assets`](Self::list_assets), with the fetched page
    /// sorted client-side.
    pub async fn list_assets_sorted(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
        order: AssetSortOrder,
    ) -> Result<Vec<Asset>, CoreError> {
        let mut assets = self.market.list_assets(limit, offset, search).await?;
        sort_assets(&mut assets, order);
        Ok(assets)
    }

    /// Detail record for one asset. Served from the session cache while
    /// fresh (5 minutes), refetched and overwritten once stale.
    pub async fn asset_detail(&mut self, id: &str) -> Result<Asset, CoreError> {
        self.market
            .asset_detail(id, Utc::now().timestamp_millis())
            .await
    }

    /// Price history for one asset over the interval's look-back window,
    /// cached per (asset, interval) with the same 5-minute expiry.
    pub async fn asset_history(
        &mut self,
        id: &str,
        interval: Interval,
    ) -> Result<Vec<HistoryPoint>, CoreError> {
        self.market
            .asset_history(id, interval, Utc::now().timestamp_millis())
            .await
    }

    // ── Portfolio ───────────────────────────────────────────────────

    /// Simulate buying `quantity` units of an asset.
    ///
    /// The quantity is validated before any I/O or state change. The lot
    /// is recorded at a price re-quoted from the provider at confirmation
    /// time and stamped with the current UTC time. Returns the stored lot.
    pub async fn buy(&mut self, asset_id: &str, quantity: f64) -> Result<Lot, CoreError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Purchase quantity must be positive, got {quantity}"
            )));
        }

        let asset = self.market.quote(asset_id).await?;
        let price = asset
            .price()
            .ok_or_else(|| CoreError::PriceNotAvailable(asset_id.to_string()))?;

        let lot = Lot::new(asset_id, asset.name, quantity, price, Utc::now());
        self.portfolio.add(lot.clone())?;
        Ok(lot)
    }

    /// Remove every lot matching the (asset id, purchase timestamp)
    /// composite key. Silent no-op when nothing matches.
    pub fn remove_lot(&mut self, asset_id: &str, purchased_at: &str) -> Result<(), CoreError> {
        self.portfolio.remove(asset_id, purchased_at)
    }

    /// All stored lots, in storage order.
    #[must_use]
    pub fn lots(&self) -> Vec<Lot> {
        self.portfolio.list()
    }

    // ── Valuation ───────────────────────────────────────────────────

    /// Revalue the stored portfolio against live prices.
    ///
    /// Fetches one quote per distinct held asset; an asset whose quote
    /// fails is valued at zero until the next refresh. An empty portfolio
    /// returns all zeros without touching the network.
    pub async fn portfolio_valuation(&self) -> PortfolioValuation {
        let lots = self.portfolio.list();
        if lots.is_empty() {
            return PortfolioValuation::default();
        }

        let mut ids: Vec<&str> = Vec::new();
        for lot in &lots {
            if !ids.contains(&lot.asset_id.as_str()) {
                ids.push(&lot.asset_id);
            }
        }

        let prices = self.market.current_prices(&ids).await;
        self.valuation_service.value(&lots, &prices)
    }

    /// Value an explicit lot snapshot against an explicit price table.
    /// Pure passthrough to the valuation engine, for callers that manage
    /// their own price refresh cadence.
    #[must_use]
    pub fn value_lots(&self, lots: &[Lot], prices: &PriceTable) -> PortfolioValuation {
        self.valuation_service.value(lots, prices)
    }

    /// Current prices for an arbitrary id set (e.g., a header ticker).
    /// Failed ids are simply absent from the table.
    pub async fn ticker_prices(&self, ids: &[&str]) -> PriceTable {
        self.market.current_prices(ids).await
    }
}
