//! Trait seams between the orchestrator, the ledger, and the adapters.

pub mod chain_lookup;
pub mod execution_verifier;
pub mod market_feed;

pub use chain_lookup::IChainLookup;
pub use execution_verifier::IExecutionVerifier;
pub use market_feed::IMarketFeed;
