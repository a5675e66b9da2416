//! Deterministic stub adapters.
//!
//! Stubs stand in for the live services during development and in tests:
//! same trait, synthetic data derived deterministically from the request, and
//! knobs for injecting failures and latency so degradation paths can be
//! exercised without a network.

use std::time::Duration;

use chrono::Utc;
use vouch_core::errors::AdapterError;
use vouch_core::models::{Chain, ChainConfirmation, MarketContext, MarketSentiment};
use vouch_core::traits::{IChainLookup, IMarketFeed};
use vouch_core::trust::ProofDigest;

/// Stub chain lookup with a fixed verdict.
///
/// Block numbers are derived from the transaction hash, so repeated lookups
/// of the same hash agree with each other the way a real chain would.
#[derive(Debug, Clone)]
pub struct StubChainLookup {
    verified: bool,
    confirmations: u64,
    delay: Duration,
    failure: Option<AdapterError>,
}

impl StubChainLookup {
    /// A transaction that settled with a healthy confirmation depth.
    pub fn confirmed() -> Self {
        Self {
            verified: true,
            confirmations: 12,
            delay: Duration::ZERO,
            failure: None,
        }
    }

    /// A transaction the chain has never seen.
    pub fn unconfirmed() -> Self {
        Self {
            verified: false,
            confirmations: 0,
            delay: Duration::ZERO,
            failure: None,
        }
    }

    /// An adapter whose upstream is down.
    pub fn failing(reason: &str) -> Self {
        Self {
            verified: false,
            confirmations: 0,
            delay: Duration::ZERO,
            failure: Some(AdapterError::Unavailable {
                adapter: "chain".to_string(),
                reason: reason.to_string(),
            }),
        }
    }

    /// Add artificial latency before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }
}

impl IChainLookup for StubChainLookup {
    async fn verify_transaction(
        &self,
        tx_hash: &str,
        _chain: Chain,
    ) -> Result<ChainConfirmation, AdapterError> {
        if self.delay > Duration::ZERO {
            tokio::time::sleep(self.delay).await;
        }
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let block_number = if self.verified {
            // Stable synthetic block per hash.
            17_000_000 + (ProofDigest::digest(tx_hash.as_bytes()).value() % 1_000_000) as u64
        } else {
            0
        };

        Ok(ChainConfirmation {
            verified: self.verified,
            confirmations: if self.verified { self.confirmations } else { 0 },
            block_number,
            timestamp: Utc::now(),
        })
    }
}

/// Stub market feed with a fixed context.
#[derive(Debug, Clone)]
pub struct StubMarketFeed {
    context: MarketContext,
    delay: Duration,
    failure: Option<AdapterError>,
}

impl StubMarketFeed {
    /// Quiet market: low volatility, deep books, neutral mood.
    pub fn calm() -> Self {
        Self::with_context(MarketContext {
            volatility: 0.05,
            volume_24h: 2_400_000.0,
            price_change_24h: 0.012,
            sentiment: MarketSentiment::Neutral,
            liquidity_score: 0.85,
        })
    }

    /// Stressed market: every deduction the blender knows about fires.
    pub fn turbulent() -> Self {
        Self::with_context(MarketContext {
            volatility: 0.28,
            volume_24h: 310_000.0,
            price_change_24h: -0.19,
            sentiment: MarketSentiment::Bearish,
            liquidity_score: 0.3,
        })
    }

    /// Serve exactly this context for every asset.
    pub fn with_context(context: MarketContext) -> Self {
        Self {
            context,
            delay: Duration::ZERO,
            failure: None,
        }
    }

    /// An adapter whose upstream is down.
    pub fn failing(reason: &str) -> Self {
        Self {
            context: MarketContext {
                volatility: 0.0,
                volume_24h: 0.0,
                price_change_24h: 0.0,
                sentiment: MarketSentiment::Neutral,
                liquidity_score: 0.0,
            },
            delay: Duration::ZERO,
            failure: Some(AdapterError::Unavailable {
                adapter: "market".to_string(),
                reason: reason.to_string(),
            }),
        }
    }

    /// Add artificial latency before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_sentiment(mut self, sentiment: MarketSentiment) -> Self {
        self.context.sentiment = sentiment;
        self
    }
}

impl IMarketFeed for StubMarketFeed {
    async fn market_context(&self, _asset: &str) -> Result<MarketContext, AdapterError> {
        if self.delay > Duration::ZERO {
            tokio::time::sleep(self.delay).await;
        }
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.context.clone())
    }
}
