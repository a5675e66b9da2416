//! Agent identity for claim submission and verification ownership.
//!
//! # Examples
//!
//! ```
//! use vouch_core::models::agent::AgentId;
//!
//! let agent = AgentId::new();
//! assert!(!agent.0.is_empty());
//!
//! let named = AgentId::from("momentum-bot");
//! assert_eq!(named.to_string(), "momentum-bot");
//! ```

use serde::{Deserialize, Serialize};

/// UUID-based agent identifier.
///
/// Wraps a `String` for type safety. Use [`AgentId::new()`] for a fresh UUID;
/// external callers usually arrive with their own stable identifier via
/// `From<&str>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    /// Create a new agent ID with a random UUID v4.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
