//! # vouch-ledger
//!
//! The ledger-side verification primitive: turns execution claims into owned
//! [`vouch_core::models::VerifiedExecution`] records, verifies pre-aggregated
//! batches with partial credit, and strengthens existing records with
//! additional proofs.
//!
//! Persistence is an external concern. This crate models the state
//! transitions only, which is why the verifier itself carries no state: a
//! record is terminal once created, and re-verification produces a new one.

pub mod verifier;

pub use verifier::LedgerVerifier;
