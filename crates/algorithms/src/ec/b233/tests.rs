//! B-233 unit tests

use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_context_generates_brick() {
    let ctx = context().unwrap();
    assert_eq!(ctx.field().degree(), 233);
    assert_eq!(ctx.field().exponents(), (74, 0, 0));
    assert_eq!(ctx.brick().generator(), ctx.generator());
    assert!(ctx.brick().entries()[0].is_identity());
    for entry in ctx.brick().entries().iter() {
        assert!(ctx.curve().is_on_curve(entry));
    }
}

#[test]
fn test_order_annihilates_generator() {
    let ctx = context().unwrap();
    let q = B233Scalar::from_words(*ctx.order());
    assert!(ctx.brick().multiply(&q).unwrap().is_identity());
}

#[test]
fn test_brick_matches_general_multiplier() {
    let ctx = context().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(233);
    for _ in 0..4 {
        let k = B233Scalar::random_bits(&mut rng, 233).unwrap();
        assert_eq!(
            ctx.brick().multiply(&k).unwrap(),
            ctx.curve().multiply(&k, ctx.generator()).unwrap()
        );
    }
}

#[test]
fn test_compression_round_trip() {
    let ctx = context().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(74);
    let k = B233Scalar::random_bits(&mut rng, 233).unwrap();
    let p = ctx.brick().multiply(&k).unwrap();
    let c = ctx.curve().compress(&p).unwrap();
    assert_eq!(ctx.curve().decompress(&c).unwrap(), p);
}
