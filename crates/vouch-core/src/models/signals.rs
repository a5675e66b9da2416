//! External signal payloads: chain confirmations and market context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a chain adapter reports about a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfirmation {
    /// Whether the transaction was found and has settled.
    pub verified: bool,
    /// Confirmation depth at lookup time.
    pub confirmations: u64,
    /// Block the transaction landed in, zero when unverified.
    pub block_number: u64,
    /// When the adapter performed the lookup.
    pub timestamp: DateTime<Utc>,
}

/// Overall market mood reported by the market feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketSentiment {
    Bullish,
    Neutral,
    Bearish,
}

/// Market conditions around an asset at verification time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketContext {
    /// Recent price volatility as a fraction, e.g. 0.08 for 8%.
    pub volatility: f64,
    /// 24-hour traded volume in quote units.
    pub volume_24h: f64,
    /// 24-hour price change as a signed fraction.
    pub price_change_24h: f64,
    pub sentiment: MarketSentiment,
    /// Normalized depth-of-book score in [0.0, 1.0].
    pub liquidity_score: f64,
}
