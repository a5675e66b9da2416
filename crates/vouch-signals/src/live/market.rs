//! Live market data adapter.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use vouch_core::errors::AdapterError;
use vouch_core::models::{MarketContext, MarketSentiment};
use vouch_core::traits::IMarketFeed;

use super::{build_client, classify_transport_error};

const ADAPTER: &str = "market";

/// Wire shape of the market data provider's context endpoint. Sentiment
/// arrives as a string; anything outside the known set fails decoding and
/// surfaces as a malformed response.
#[derive(Debug, Deserialize)]
struct MarketContextResponse {
    volatility: f64,
    volume_24h: f64,
    price_change_24h: f64,
    sentiment: MarketSentiment,
    liquidity_score: f64,
}

/// Market context lookup against a data provider's HTTP API.
#[derive(Debug, Clone)]
pub struct LiveMarketFeed {
    client: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl LiveMarketFeed {
    /// Build an adapter for the given provider endpoint.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, AdapterError> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_client(ADAPTER, timeout)?,
            endpoint,
            timeout_secs: timeout.as_secs(),
        })
    }
}

impl IMarketFeed for LiveMarketFeed {
    async fn market_context(&self, asset: &str) -> Result<MarketContext, AdapterError> {
        let url = format!("{}/v1/market/{}", self.endpoint, asset);
        debug!(asset, "market context fetch");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_transport_error(ADAPTER, self.timeout_secs, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::Unavailable {
                adapter: ADAPTER.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let payload: MarketContextResponse = response
            .json()
            .await
            .map_err(|e| classify_transport_error(ADAPTER, self.timeout_secs, e))?;

        // Out-of-range numbers are passed through; the blender clamps.
        Ok(MarketContext {
            volatility: payload.volatility,
            volume_24h: payload.volume_24h,
            price_change_24h: payload.price_change_24h,
            sentiment: payload.sentiment,
            liquidity_score: payload.liquidity_score,
        })
    }
}
