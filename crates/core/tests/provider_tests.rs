// ═══════════════════════════════════════════════════════════════════
// Provider Tests — MarketDataProvider seam, CoinCapProvider wiring
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;

use coin_dashboard_core::errors::CoreError;
use coin_dashboard_core::models::asset::Asset;
use coin_dashboard_core::models::history::{HistoryPoint, Interval};
use coin_dashboard_core::providers::coincap::CoinCapProvider;
use coin_dashboard_core::providers::traits::MarketDataProvider;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Provider
// ═══════════════════════════════════════════════════════════════════

struct MockProvider {
    name: String,
}

impl MockProvider {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

fn asset(id: &str) -> Asset {
    Asset {
        id: id.to_string(),
        symbol: id.to_uppercase(),
        name: id.to_string(),
        rank: None,
        price_usd: Some("100.0".to_string()),
        market_cap_usd: None,
        change_percent_24hr: None,
        supply: None,
        max_supply: None,
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list_assets(
        &self,
        limit: u32,
        _offset: u32,
        _search: Option<&str>,
    ) -> Result<Vec<Asset>, CoreError> {
        Ok((0..limit.min(3)).map(|i| asset(&format!("coin{i}"))).collect())
    }

    async fn get_asset(&self, id: &str) -> Result<Asset, CoreError> {
        Ok(asset(id))
    }

    async fn get_asset_history(
        &self,
        _id: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<HistoryPoint>, CoreError> {
        // One point per window edge, tagged with the bucket for inspection
        Ok(vec![
            HistoryPoint {
                price_usd: interval.provider_bucket().len().to_string(),
                time: start_ms,
            },
            HistoryPoint {
                price_usd: interval.provider_bucket().len().to_string(),
                time: end_ms,
            },
        ])
    }
}

// ═══════════════════════════════════════════════════════════════════
// Trait-object seam
// ═══════════════════════════════════════════════════════════════════

mod trait_seam {
    use super::*;

    #[tokio::test]
    async fn provider_is_usable_as_a_trait_object() {
        let provider: Box<dyn MarketDataProvider> = Box::new(MockProvider::new("Mock"));

        assert_eq!(provider.name(), "Mock");

        let listed = provider.list_assets(2, 0, None).await.unwrap();
        assert_eq!(listed.len(), 2);

        let detail = provider.get_asset("bitcoin").await.unwrap();
        assert_eq!(detail.id, "bitcoin");

        let history = provider
            .get_asset_history("bitcoin", Interval::H1, 0, 1_000)
            .await
            .unwrap();
        assert_eq!(history.first().unwrap().time, 0);
        assert_eq!(history.last().unwrap().time, 1_000);
    }
}

// ═══════════════════════════════════════════════════════════════════
// CoinCapProvider
// ═══════════════════════════════════════════════════════════════════

mod coincap {
    use super::*;

    #[test]
    fn constructs_with_name() {
        let provider = CoinCapProvider::new();
        assert_eq!(provider.name(), "CoinCap");
    }

    #[test]
    fn default_matches_new() {
        let provider = CoinCapProvider::default();
        assert_eq!(provider.name(), "CoinCap");
    }

    #[test]
    fn is_boxable_as_a_trait_object() {
        let provider: Box<dyn MarketDataProvider> = Box::new(CoinCapProvider::new());
        assert_eq!(provider.name(), "CoinCap");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Wire-shape fixtures — the exact JSON CoinCap sends back
// ═══════════════════════════════════════════════════════════════════

mod wire_shapes {
    use super::*;

    #[test]
    fn asset_listing_entries_deserialize() {
        let json = r#"[
            {"id":"bitcoin","rank":"1","symbol":"BTC","name":"Bitcoin",
             "supply":"19600000","maxSupply":"21000000",
             "marketCapUsd":"1200000000000","priceUsd":"61230.10",
             "changePercent24Hr":"-1.52"},
            {"id":"ethereum","rank":"2","symbol":"ETH","name":"Ethereum",
             "supply":"120000000","maxSupply":null,
             "marketCapUsd":"400000000000","priceUsd":"3300.42",
             "changePercent24Hr":"0.87"}
        ]"#;
        let assets: Vec<Asset> = serde_json::from_str(json).unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[1].max_supply, None);
        assert!(assets[0].price().is_some());
    }

    #[test]
    fn history_entries_deserialize_in_order() {
        let json = r#"[
            {"priceUsd":"61230.10","time":1700000000000},
            {"priceUsd":"61250.99","time":1700000060000}
        ]"#;
        let points: Vec<HistoryPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(points.len(), 2);
        assert!(points[0].time < points[1].time);
    }

    #[test]
    fn extra_fields_are_tolerated() {
        // CoinCap adds fields over time (vwap24Hr, explorer, ...); the
        // model must not reject them.
        let json = r#"{"id":"bitcoin","symbol":"BTC","name":"Bitcoin",
                       "priceUsd":"61230.10","vwap24Hr":"61000.00",
                       "explorer":"https://blockchain.info/"}"#;
        let a: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, "bitcoin");
    }
}
