use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::MarketDataProvider;
use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::history::{HistoryPoint, Interval};

const BASE_URL: &str = "https://api.coincap.io/v2";

/// CoinCap API provider.
///
/// - **Free**: No API key required, no strict rate limits.
/// - **Data**: 2000+ cryptocurrencies, real-time and historical.
/// - **Endpoints**: `/assets`, `/assets/{id}`, `/assets/{id}/history`
///
/// CoinCap uses lowercase ids like "bitcoin", "ethereum"; all prices are
/// quoted in USD as decimal strings.
pub struct CoinCapProvider {
    client: Client,
}

impl CoinCapProvider {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }

    fn api_error(message: String) -> CoreError {
        CoreError::Api {
            provider: "CoinCap".into(),
            message,
        }
    }
}

impl Default for CoinCapProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinCap API response envelopes ──────────────────────────────────
// Every endpoint wraps its payload in {"data": ...}.

#[derive(Deserialize)]
struct AssetsResponse {
    data: Vec<Asset>,
}

#[derive(Deserialize)]
struct AssetResponse {
    data: Asset,
}

#[derive(Deserialize)]
struct HistoryResponse {
    data: Vec<HistoryPoint>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for CoinCapProvider {
    fn name(&self) -> &str {
        "CoinCap"
    }

    async fn list_assets(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> Result<Vec<Asset>, CoreError> {
        let mut request = self
            .client
            .get(format!("{BASE_URL}/assets"))
            .query(&[("limit", limit), ("offset", offset)]);
        if let Some(term) = search.filter(|t| !t.trim().is_empty()) {
            request = request.query(&[("search", term.trim())]);
        }

        let resp: AssetsResponse = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| Self::api_error(format!("Failed to parse asset listing: {e}")))?;

        Ok(resp.data)
    }

    async fn get_asset(&self, id: &str) -> Result<Asset, CoreError> {
        let url = format!("{BASE_URL}/assets/{id}");
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CoreError::AssetNotFound(id.to_string()));
        }

        let resp: AssetResponse = response
            .error_for_status()?
            .json()
            .await
            .map_err(|e| Self::api_error(format!("Failed to parse detail for {id}: {e}")))?;

        Ok(resp.data)
    }

    async fn get_asset_history(
        &self,
        id: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<HistoryPoint>, CoreError> {
        let url = format!("{BASE_URL}/assets/{id}/history");
        let resp: HistoryResponse = self
            .client
            .get(&url)
            .query(&[("interval", interval.provider_bucket())])
            .query(&[("start", start_ms), ("end", end_ms)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| Self::api_error(format!("Failed to parse history for {id}: {e}")))?;

        Ok(resp.data)
    }
}
