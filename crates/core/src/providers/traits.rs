use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::history::{HistoryPoint, Interval};

/// Trait abstraction over the read-only market-data API.
///
/// The dashboard only ever talks to this trait. If the backing API stops
/// working or changes, we replace one implementation — the rest of the
/// codebase is untouched, and tests inject a mock.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// List tradable assets, paginated, optionally filtered by a search term.
    async fn list_assets(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> Result<Vec<Asset>, CoreError>;

    /// Fetch the detail record for a single asset by its API id.
    async fn get_asset(&self, id: &str) -> Result<Asset, CoreError>;

    /// Fetch time-bucketed history for an asset over `[start_ms, end_ms]`.
    /// Points come back ordered by time.
    async fn get_asset_history(
        &self,
        id: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<HistoryPoint>, CoreError>;
}
