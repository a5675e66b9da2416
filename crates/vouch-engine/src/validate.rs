//! Structural validation of incoming decision requests.
//!
//! Runs before fingerprinting, before the ledger, before any adapter call.
//! A request that fails here never touches the cache, so malformed input can
//! not poison memoized results.

use std::sync::LazyLock;

use regex::Regex;
use vouch_core::{Chain, DecisionRequest, RequestError};

/// EVM transaction hashes: `0x` followed by exactly 64 hex digits.
static EVM_TX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{64}$").unwrap());

/// Solana transaction signatures: base58 alphabet (no `0`, `O`, `I`, `l`),
/// 43 to 88 characters.
static SOLANA_TX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{43,88}$").unwrap());

/// Reject requests that are structurally unusable.
///
/// Checks run in field order and stop at the first failure: agent id, asset
/// symbol, amount, price, then transaction hash shape for the target chain.
pub fn validate_request(request: &DecisionRequest) -> Result<(), RequestError> {
    if request.agent_id.as_str().trim().is_empty() {
        return Err(RequestError::EmptyAgentId);
    }
    if request.decision.asset.trim().is_empty() {
        return Err(RequestError::EmptyAsset);
    }

    let amount = request.decision.amount;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(RequestError::InvalidAmount { amount });
    }
    if let Some(price) = request.decision.price {
        if !price.is_finite() || price <= 0.0 {
            return Err(RequestError::InvalidPrice { price });
        }
    }

    if let Some(hash) = &request.decision.transaction_hash {
        if !hash_matches_chain(hash, request.decision.chain) {
            return Err(RequestError::MalformedTransactionHash {
                chain: request.decision.chain.to_string(),
                hash: hash.clone(),
            });
        }
    }

    Ok(())
}

fn hash_matches_chain(hash: &str, chain: Chain) -> bool {
    match chain {
        Chain::Ethereum | Chain::Base => EVM_TX_RE.is_match(hash),
        Chain::Solana => SOLANA_TX_RE.is_match(hash),
    }
}
