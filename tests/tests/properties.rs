//! Property tests across the field, codec and key-agreement layers

use gfecdh_algorithms::ec::b163::{self, B163Context, B163Scalar};
use gfecdh_algorithms::ec::gf2m::CompressedPoint;
use gfecdh_api::KeyAgreement;
use gfecdh_kem::{B163PublicKey, EcdhB163, SessionState};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::OnceLock;

fn ctx() -> &'static B163Context {
    static CTX: OnceLock<B163Context> = OnceLock::new();
    CTX.get_or_init(|| b163::context().unwrap())
}

fn ecdh() -> &'static EcdhB163 {
    static ECDH: OnceLock<EcdhB163> = OnceLock::new();
    ECDH.get_or_init(|| EcdhB163::new().unwrap())
}

fn scalar_163() -> impl Strategy<Value = B163Scalar> {
    prop::array::uniform6(any::<u32>()).prop_map(|mut w| {
        w[5] &= 0x7;
        w[0] |= 1;
        B163Scalar::from_words(w)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn agreement_is_symmetric(seed in any::<u64>()) {
        let ecdh = ecdh();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (pk_a, sk_a) = ecdh.keypair(&mut rng).unwrap();
        let (pk_b, sk_b) = ecdh.keypair(&mut rng).unwrap();

        prop_assert_eq!(ecdh.agree(&sk_a, &pk_b).unwrap(), ecdh.agree(&sk_b, &pk_a).unwrap());
    }

    #[test]
    fn brick_matches_general_multiplier(k in scalar_163()) {
        let ctx = ctx();
        let by_brick = ctx.brick().multiply(&k).unwrap();
        let by_ladder = ctx.curve().multiply(&k, ctx.generator()).unwrap();
        prop_assert_eq!(by_brick, by_ladder);
    }

    #[test]
    fn compression_round_trips(k in scalar_163()) {
        let ctx = ctx();
        let curve = ctx.curve();
        let p = ctx.brick().multiply(&k).unwrap();

        let c = curve.compress(&p).unwrap();
        let mut bytes = [0u8; 22];
        c.encode(ctx.field(), &mut bytes).unwrap();
        let decoded = CompressedPoint::decode(ctx.field(), &bytes).unwrap();
        prop_assert_eq!(curve.decompress(&decoded).unwrap(), p);
    }

    #[test]
    fn hostile_peer_values_never_panic(bytes in prop::array::uniform22(any::<u8>())) {
        let ecdh = ecdh();
        let mut session = ecdh.session();
        let mut rng = ChaCha20Rng::seed_from_u64(u64::from(bytes[21]));
        session.generate(&mut rng).unwrap();
        session.derive_public().unwrap();

        match session.complete_encoded(&bytes) {
            Ok(_) => prop_assert_eq!(session.state(), SessionState::Terminal),
            Err(e) => {
                prop_assert!(e.is_peer_error());
                prop_assert_eq!(session.state(), SessionState::Aborted);
            }
        }
    }

    #[test]
    fn decoded_points_lie_on_the_curve(bytes in prop::array::uniform22(any::<u8>())) {
        let ctx = ctx();
        if let Ok(c) = CompressedPoint::decode(ctx.field(), &bytes) {
            if let Ok(p) = ctx.curve().decompress(&c) {
                prop_assert!(ctx.curve().is_on_curve(&p));
                prop_assert_eq!(ctx.curve().compress(&p).unwrap(), c);
            }
        }
    }

    #[test]
    fn agree_rejects_or_accepts_consistently(bytes in prop::array::uniform22(any::<u8>())) {
        let ecdh = ecdh();
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let (_, sk) = ecdh.keypair(&mut rng).unwrap();
        let peer = B163PublicKey::from_bytes(&bytes).unwrap();

        let first = ecdh.agree(&sk, &peer);
        let second = ecdh.agree(&sk, &peer);
        prop_assert_eq!(first.is_ok(), second.is_ok());
        if let (Ok(a), Ok(b)) = (first, second) {
            prop_assert_eq!(a, b);
        }
    }
}
