use proptest::prelude::*;
use vouch_core::constants::TRUST_SCORE_MAX;
use vouch_core::trust::{Confidence, ProofDigest, TrustScore};

// ─── Confidence stays inside the unit interval ───────────────────────────

proptest! {
    #[test]
    fn confidence_always_lands_in_unit_interval(value in -10.0f64..10.0) {
        let confidence = Confidence::new(value);
        prop_assert!(confidence.value() >= 0.0);
        prop_assert!(confidence.value() <= 1.0);
    }
}

proptest! {
    #[test]
    fn risk_is_the_exact_complement(value in 0.0f64..=1.0) {
        let confidence = Confidence::new(value);
        prop_assert!((confidence.risk().value() - (1.0 - value)).abs() < 1e-12);
        // Complementing twice is the identity.
        prop_assert!((confidence.risk().risk().value() - value).abs() < 1e-12);
    }
}

// ─── Basis points and the unit scale agree ───────────────────────────────

proptest! {
    #[test]
    fn trust_score_converts_linearly(basis_points in 0..=TRUST_SCORE_MAX) {
        let score = TrustScore::new(basis_points);
        let expected = f64::from(basis_points) / f64::from(TRUST_SCORE_MAX);
        prop_assert!((score.as_confidence().value() - expected).abs() < 1e-12);
    }
}

proptest! {
    #[test]
    fn trust_score_ordering_survives_conversion(a in 0..=TRUST_SCORE_MAX, b in 0..=TRUST_SCORE_MAX) {
        let (low, high) = (a.min(b), a.max(b));
        prop_assert!(
            TrustScore::new(low).as_confidence().value()
                <= TrustScore::new(high).as_confidence().value()
        );
    }
}

// ─── Digest hex form round-trips for every field element ─────────────────

proptest! {
    #[test]
    fn digest_hex_round_trips(value in any::<u128>()) {
        let digest = ProofDigest::from_u128(value);
        let hex = digest.to_hex();
        prop_assert_eq!(hex.len(), 32);
        prop_assert_eq!(ProofDigest::from_hex(&hex), Some(digest));
    }
}
