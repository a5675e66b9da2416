//! System-wide constants shared across the Vouch crates.
//!
//! Ledger-side scoring runs on integer basis points so every node reaches the
//! same result without floating-point drift. Blending weights used only by the
//! orchestrator live next to their formulas in `vouch-engine`.

/// Crate version, stamped into verification results and health reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of the trust score scale, in basis points (100.00%).
pub const TRUST_SCORE_MAX: u32 = 10_000;

/// Claims below this self-reported confidence are rejected outright.
pub const MIN_CLAIM_CONFIDENCE: u32 = 5_000;

/// Flat bonus a claim earns for presenting proof material at all.
pub const PROOF_BONUS: u32 = 1_000;

/// Batch average trust at or above this earns full credit for the batch.
pub const BATCH_TRUST_THRESHOLD: u32 = 7_000;

/// Largest batch a single `batch_verify` call accepts.
pub const MAX_BATCH_SIZE: u32 = 5;
