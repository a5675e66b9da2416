//! Scoring primitives shared by the ledger and the orchestrator.
//!
//! The ledger side works in integer basis points ([`TrustScore`]) so results
//! are reproducible across nodes. The orchestrator side works in a clamped
//! floating-point range ([`Confidence`]). [`ProofDigest`] is the 128-bit
//! field element both sides exchange.

pub mod confidence;
pub mod digest;
pub mod trust_score;

pub use confidence::Confidence;
pub use digest::ProofDigest;
pub use trust_score::TrustScore;
