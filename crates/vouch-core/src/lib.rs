//! # vouch-core
//!
//! Foundation crate for the Vouch trust verification engine. Everything the
//! other crates share lives here: domain models, scoring newtypes, the error
//! taxonomy, configuration, constants, and the trait seams the ledger and
//! signal adapters plug into.
//!
//! No I/O happens in this crate. Network and cache behaviour belong to
//! `vouch-signals` and `vouch-engine`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod trust;

// Re-export the types callers touch on every request so downstream crates can
// `use vouch_core::{...}` without spelling out the module tree.
pub use config::VouchConfig;
pub use errors::{AdapterError, ConfigError, LedgerError, RequestError, VouchError, VouchResult};
pub use models::{
    AgentId, BatchRequest, BatchResult, Chain, ChainConfirmation, ClaimEnvelope, DecisionRequest,
    ExecutionClaim, HealthMetrics, HealthReport, HealthStatus, MarketContext, MarketSentiment,
    PrivateInputs, SubsystemHealth, TradeAction, TradeDecision, TrustMetrics, VerificationResult,
    VerificationStatus, VerifiedExecution,
};
pub use traits::{IChainLookup, IExecutionVerifier, IMarketFeed};
pub use trust::{Confidence, ProofDigest, TrustScore};
