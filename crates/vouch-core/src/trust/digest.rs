use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 128-bit proof field element.
///
/// Wire and storage form is a 32-character lowercase hex string so digests
/// stay readable in fixtures and logs. Arithmetic on digests (composition,
/// aggregation) lives in `vouch-proof`; this type only carries the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ProofDigest(u128);

impl ProofDigest {
    /// Wrap a raw field element.
    pub fn from_u128(value: u128) -> Self {
        Self(value)
    }

    /// Digest arbitrary bytes into the field via BLAKE3, truncated to the low
    /// 128 bits so the element fits a fixed-width ledger slot.
    pub fn digest(content: &[u8]) -> Self {
        let hash = blake3::hash(content);
        let mut lower = [0u8; 16];
        lower.copy_from_slice(&hash.as_bytes()[..16]);
        Self(u128::from_le_bytes(lower))
    }

    /// Raw field element value.
    pub fn value(self) -> u128 {
        self.0
    }

    /// Zero-padded 32-character lowercase hex form.
    pub fn to_hex(self) -> String {
        format!("{:032x}", self.0)
    }

    /// Parse a hex string, with or without a `0x` prefix. Returns `None` for
    /// anything that is not valid hex or overflows 128 bits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let trimmed = hex.strip_prefix("0x").unwrap_or(hex);
        if trimmed.is_empty() || trimmed.len() > 32 {
            return None;
        }
        u128::from_str_radix(trimmed, 16).ok().map(Self)
    }
}

impl fmt::Display for ProofDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl From<u128> for ProofDigest {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl Serialize for ProofDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ProofDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid proof digest hex: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        let a = ProofDigest::digest(b"execution-42");
        let b = ProofDigest::digest(b"execution-42");
        assert_eq!(a, b);
        assert_ne!(a, ProofDigest::digest(b"execution-43"));
    }

    #[test]
    fn hex_round_trip() {
        let original = ProofDigest::from_u128(0xdead_beef_cafe);
        let parsed = ProofDigest::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
        assert_eq!(ProofDigest::from_hex("0xff").unwrap().value(), 255);
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(ProofDigest::from_hex("").is_none());
        assert!(ProofDigest::from_hex("zzüg").is_none());
        // 33 hex chars overflows 128 bits.
        assert!(ProofDigest::from_hex(&"f".repeat(33)).is_none());
    }

    #[test]
    fn serde_uses_padded_hex() {
        let digest = ProofDigest::from_u128(1234);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, "\"000000000000000000000000000004d2\"");
        let back: ProofDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
