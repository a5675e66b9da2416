//! Criterion benchmarks for vouch-proof.
//!
//! Targets:
//! - trust_score < 10ns (two compares, one add)
//! - proof_hash < 20ns (two mults, two adds)
//! - combine_proofs chain of 1000 < 5µs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vouch_core::trust::{ProofDigest, TrustScore};
use vouch_proof::{combine_proofs, proof_hash, trust_score};

fn bench_trust_score(c: &mut Criterion) {
    let proof = ProofDigest::from_u128(0x5eed);
    c.bench_function("trust_score_mid_range", |bench| {
        bench.iter(|| trust_score(black_box(7_500), proof));
    });
}

fn bench_proof_hash(c: &mut Criterion) {
    let id = ProofDigest::from_u128(0xabcdef);
    let data = ProofDigest::from_u128(0x123456);
    let score = TrustScore::new(8_000);
    c.bench_function("proof_hash_mix", |bench| {
        bench.iter(|| proof_hash(black_box(id), data, score));
    });
}

fn bench_combine_chain(c: &mut Criterion) {
    let proofs: Vec<ProofDigest> = (0..1_000u128)
        .map(|i| ProofDigest::from_u128(i.wrapping_mul(0x9e3779b9)))
        .collect();
    c.bench_function("combine_proofs_chain_1000", |bench| {
        bench.iter(|| {
            proofs
                .iter()
                .copied()
                .fold(ProofDigest::from_u128(0), combine_proofs)
        });
    });
}

criterion_group!(
    benches,
    bench_trust_score,
    bench_proof_hash,
    bench_combine_chain,
);
criterion_main!(benches);
