//! Live chain explorer adapter.

use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;
use tracing::debug;
use vouch_core::errors::AdapterError;
use vouch_core::models::{Chain, ChainConfirmation};
use vouch_core::traits::IChainLookup;

use super::{build_client, classify_transport_error};

const ADAPTER: &str = "chain";

/// Wire shape of the explorer's transaction status endpoint.
#[derive(Debug, Deserialize)]
struct TxStatusResponse {
    confirmed: bool,
    #[serde(default)]
    confirmations: u64,
    #[serde(default)]
    block_number: u64,
}

/// Chain lookup against an explorer HTTP API.
#[derive(Debug, Clone)]
pub struct LiveChainLookup {
    client: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl LiveChainLookup {
    /// Build an adapter for the given explorer endpoint.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, AdapterError> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_client(ADAPTER, timeout)?,
            endpoint,
            timeout_secs: timeout.as_secs(),
        })
    }
}

impl IChainLookup for LiveChainLookup {
    async fn verify_transaction(
        &self,
        tx_hash: &str,
        chain: Chain,
    ) -> Result<ChainConfirmation, AdapterError> {
        let url = format!("{}/v1/{}/tx/{}", self.endpoint, chain, tx_hash);
        debug!(%chain, tx_hash, "chain lookup");

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

        let payload: TxStatusResponse = response
            .json()
            .await
            .map_err(|e| classify_transport_error(ADAPTER, self.timeout_secs, e))?;

        Ok(ChainConfirmation {
            verified: payload.confirmed,
            confirmations: payload.confirmations,
            block_number: payload.block_number,
            timestamp: Utc::now(),
        })
    }
}
