//! Wire-shape contract for verification results, pinned by golden fixtures.
//!
//! The fixtures are hand-written JSON in the shape clients consume. A field
//! rename, a changed enum casing, or a dropped null would break the
//! round-trip comparison here before it breaks a client.

use test_fixtures::{load_fixture, load_fixture_value};
use vouch_core::{MarketSentiment, VerificationResult, VerificationStatus};
use vouch_engine::classify::classify;

#[test]
fn approved_golden_round_trips_unchanged() {
    let raw = load_fixture_value("golden/verification/approved_confirmed_calm.json");
    let result: VerificationResult = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(result.status, VerificationStatus::Approved);
    assert!((result.confidence.value() - 0.9).abs() < 1e-12);
    assert!(result.issues.is_empty());

    let chain = result.blockchain.as_ref().unwrap();
    assert!(chain.verified);
    assert_eq!(chain.confirmations, 12);

    let market = result.market.as_ref().unwrap();
    assert_eq!(market.sentiment, MarketSentiment::Neutral);

    // Anything the struct renames, drops, or re-cases shows up here.
    let reserialized = serde_json::to_value(&result).unwrap();
    assert_eq!(reserialized, raw);
}

#[test]
fn rejected_golden_round_trips_unchanged() {
    let raw = load_fixture_value("golden/verification/rejected_unconfirmed.json");
    let result: VerificationResult = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(
        result.issues,
        vec!["Transaction not confirmed on blockchain".to_string()]
    );
    assert!(result.market.is_none());
    assert!(!result.blockchain.as_ref().unwrap().verified);

    let reserialized = serde_json::to_value(&result).unwrap();
    assert_eq!(reserialized, raw);
}

#[test]
fn golden_statuses_agree_with_the_classifier() {
    for fixture in [
        "golden/verification/approved_confirmed_calm.json",
        "golden/verification/rejected_unconfirmed.json",
    ] {
        let result: VerificationResult = load_fixture(fixture);
        assert_eq!(
            classify(result.confidence, result.risk_score),
            result.status,
            "{fixture}"
        );
    }
}
