//! Domain models exchanged between the ledger, the adapters, and the
//! orchestrator.

pub mod agent;
pub mod batch;
pub mod claim;
pub mod decision;
pub mod health_report;
pub mod record;
pub mod signals;
pub mod verification;

pub use agent::AgentId;
pub use batch::{BatchRequest, BatchResult};
pub use claim::{ClaimEnvelope, ExecutionClaim, PrivateInputs};
pub use decision::{Chain, DecisionRequest, TradeAction, TradeDecision};
pub use health_report::{HealthMetrics, HealthReport, HealthStatus, SubsystemHealth};
pub use record::VerifiedExecution;
pub use signals::{ChainConfirmation, MarketContext, MarketSentiment};
pub use verification::{TrustMetrics, VerificationResult, VerificationStatus};
