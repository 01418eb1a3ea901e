//! Benchmarks for ECDH-B163 key agreement

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gfecdh_api::KeyAgreement;
use gfecdh_kem::EcdhB163;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_ecdh_b163(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdh_b163");
    group.sample_size(10);

    let ecdh = EcdhB163::new().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(163);

    group.bench_function("keypair", |b| b.iter(|| ecdh.keypair(&mut rng).unwrap()));

    let (pk_a, sk_a) = ecdh.keypair(&mut rng).unwrap();
    let (pk_b, _) = ecdh.keypair(&mut rng).unwrap();

    group.bench_function("public_key", |b| {
        b.iter(|| ecdh.public_key(black_box(&sk_a)).unwrap())
    });

    group.bench_function("agree", |b| {
        b.iter(|| ecdh.agree(black_box(&sk_a), black_box(&pk_b)).unwrap())
    });

    group.bench_function("session", |b| {
        b.iter(|| {
            let mut session = ecdh.session();
            session.generate(&mut rng).unwrap();
            session.derive_public().unwrap();
            session.complete_encoded(black_box(pk_a.as_ref())).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ecdh_b163);
criterion_main!(benches);
