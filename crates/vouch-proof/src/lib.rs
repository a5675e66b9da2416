//! # vouch-proof
//!
//! Trust-score arithmetic and proof-hash composition. Everything in this
//! crate is a pure function of its arguments: no I/O, no clock, no state.
//! The ledger (`vouch-ledger`) builds its record transitions on top of these
//! primitives.

pub mod compose;

pub use compose::{apply_proof_bonus, combine_proofs, proof_hash, trust_score};
