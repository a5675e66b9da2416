use crate::errors::AdapterError;
use crate::models::MarketContext;

/// Market condition lookup for an asset.
#[allow(async_fn_in_trait)]
pub trait IMarketFeed: Send + Sync {
    /// Fetch current market context for `asset`. Callers cache the result;
    /// implementations should not.
    async fn market_context(&self, asset: &str) -> Result<MarketContext, AdapterError>;
}
