//! Verification orchestrator.
//!
//! [`VerificationEngine`] is the single entry point callers use: it validates
//! a [`vouch_core::DecisionRequest`], runs any attached execution claim
//! through the ledger, gathers chain and market signals with a hard deadline,
//! blends everything into a confidence score, and classifies the outcome.
//!
//! Results are memoized by request fingerprint so identical decisions within
//! the cache TTL are answered without re-verification. Signal adapters are
//! best-effort: when one fails or times out the engine degrades to whatever
//! signals it has, records an advisory on the result, and keeps going. Only
//! malformed requests and invalid claims are hard errors.

pub mod blend;
pub mod cache;
pub mod classify;
pub mod engine;
pub mod validate;

pub use blend::{BlendInputs, BlendOutcome};
pub use cache::TtlCache;
pub use engine::VerificationEngine;
