//! # vouch-signals
//!
//! External signal adapters: blockchain transaction lookup and market
//! context. Each comes in two variants behind the same trait — a live HTTP
//! adapter and a deterministic stub — selected by dependency injection, so
//! the engine never inspects which one it holds.
//!
//! Adapters make exactly one attempt per call. Deadlines and degradation are
//! the orchestrator's job.

pub mod live;
pub mod stub;

pub use live::{LiveChainLookup, LiveMarketFeed};
pub use stub::{StubChainLookup, StubMarketFeed};
