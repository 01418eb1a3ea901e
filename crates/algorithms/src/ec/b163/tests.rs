//! B-163 unit tests

use super::*;
use crate::ec::gf2m::Brick;
use crate::error::Error;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const G_COMPRESSED: &str = "0303f0eba16286a2d57ea0991168d4994637e8343e36";
const G2_COMPRESSED: &str = "0201aeb33fed9c49e0200a0c561ea66d5ab85bd4c2d4";

fn encode(ctx: &B163Context, p: &B163Point) -> [u8; B163_POINT_COMPRESSED_SIZE] {
    let mut out = [0u8; B163_POINT_COMPRESSED_SIZE];
    ctx.curve()
        .compress(p)
        .unwrap()
        .encode(ctx.field(), &mut out)
        .unwrap();
    out
}

#[test]
fn test_context_loads_and_validates() {
    let ctx = context().unwrap();
    assert_eq!(ctx.field().degree(), 163);
    assert_eq!(ctx.field().exponents(), (7, 6, 3));
    assert!(ctx.curve().a().is_one());
    assert!(ctx.curve().is_on_curve(ctx.generator()));
    assert_eq!(ctx.brick().generator(), ctx.generator());
    assert_eq!(ctx.brick().window(), 4);
    assert_eq!(ctx.brick().comb_length(), 163);
}

#[test]
fn test_generator_encoding() {
    let ctx = context().unwrap();
    assert_eq!(hex::encode(encode(&ctx, ctx.generator())), G_COMPRESSED);

    let g2 = ctx.curve().double(ctx.generator());
    assert_eq!(hex::encode(encode(&ctx, &g2)), G2_COMPRESSED);
}

#[test]
fn test_order_annihilates_generator() {
    let ctx = context().unwrap();
    let q = B163Scalar::from_words(*ctx.order());
    assert!(ctx.brick().multiply(&q).unwrap().is_identity());
    assert!(ctx.curve().multiply(&q, ctx.generator()).unwrap().is_identity());
}

#[test]
fn test_rom_table_matches_generated_table() {
    let ctx = context().unwrap();
    let generated: Brick<B163_WORDS, B163_BRICK_ENTRIES> =
        Brick::from_generator(*ctx.curve(), ctx.generator(), 4, 163).unwrap();
    assert_eq!(generated.entries(), ctx.brick().entries());

    let mut rom = [0u32; 2 * B163_WORDS * B163_BRICK_ENTRIES];
    generated.write_rom(&mut rom).unwrap();
    assert_eq!(rom, gfecdh_params::b163::BRICK_ROM);
}

#[test]
fn test_brick_matches_general_multiplier() {
    let ctx = context().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(0xb163);
    for _ in 0..8 {
        let k = B163Scalar::random_bits(&mut rng, 163).unwrap();
        let fixed = ctx.brick().multiply(&k).unwrap();
        let general = ctx.curve().multiply(&k, ctx.generator()).unwrap();
        assert_eq!(fixed, general);
    }
}

#[test]
fn test_compression_round_trip() {
    let ctx = context().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(21);
    for _ in 0..8 {
        let k = B163Scalar::random_bits(&mut rng, 163).unwrap();
        let p = ctx.brick().multiply(&k).unwrap();
        let bytes = encode(&ctx, &p);
        let c = B163CompressedPoint::decode(ctx.field(), &bytes).unwrap();
        assert_eq!(ctx.curve().decompress(&c).unwrap(), p);
    }
}

#[test]
fn test_decompression_rejects_x_off_curve() {
    let ctx = context().unwrap();
    let mut bytes = [0u8; B163_POINT_COMPRESSED_SIZE];
    bytes[0] = 0x02;
    bytes[B163_POINT_COMPRESSED_SIZE - 1] = 5;
    let c = B163CompressedPoint::decode(ctx.field(), &bytes).unwrap();
    assert!(matches!(
        ctx.curve().decompress(&c),
        Err(Error::DecompressionFailure { .. })
    ));

    // x with bit 163 set is not a field element
    bytes[1] = 0x08;
    assert!(matches!(
        B163CompressedPoint::decode(ctx.field(), &bytes),
        Err(Error::DecompressionFailure { .. })
    ));
}

#[test]
fn test_adversarial_point_rejected() {
    let ctx = context().unwrap();
    let f = ctx.field();
    let mut x = [0u32; B163_WORDS];
    x[0] = 5;
    let bogus = B163Point::new_unchecked(f.element(x).unwrap(), B163FieldElement::one());
    let k = B163Scalar::from_words([3, 0, 0, 0, 0, 0]);
    assert_eq!(
        ctx.curve().multiply(&k, &bogus),
        Err(Error::InvalidPoint {
            context: "general scalar multiplication"
        })
    );
}

#[test]
fn test_scalar_range() {
    let ctx = context().unwrap();
    let wide = B163Scalar::from_words([0, 0, 0, 0, 0, 8]);
    assert_eq!(
        ctx.brick().multiply(&wide),
        Err(Error::ScalarOutOfRange {
            bits: 164,
            max_bits: 163
        })
    );
    assert!(matches!(
        ctx.curve().multiply(&wide, ctx.generator()),
        Err(Error::ScalarOutOfRange { .. })
    ));
}

#[test]
fn test_tampered_rom_is_rejected() {
    let mut table = gfecdh_params::b163::BRICK_ROM;
    table[2 * B163_WORDS * 5] ^= 1;
    let rom = CurveRom {
        brick: Some(&table),
        ..B163_ROM
    };
    assert!(matches!(
        B163Context::from_rom(&rom),
        Err(Error::InvalidTable { .. })
    ));

    let mut parameters = gfecdh_params::b163::ROM;
    parameters[..B163_WORDS].iter_mut().for_each(|w| *w = 0);
    let rom = CurveRom {
        parameters: &parameters,
        ..B163_ROM
    };
    assert_eq!(
        B163Context::from_rom(&rom).unwrap_err(),
        Error::InvalidCurveParameters {
            reason: "coefficient B must be non-zero"
        }
    );
}

#[test]
fn test_rom_for_another_generator_is_rejected() {
    let ctx = context().unwrap();
    let two_g = ctx.curve().double(ctx.generator());
    let brick = Brick::<B163_WORDS, B163_BRICK_ENTRIES>::from_generator(
        *ctx.curve(),
        &two_g,
        B163_ROM.window,
        B163_ROM.comb_length,
    )
    .unwrap();

    // A consistent table, just not for G
    let mut table = [0u32; 2 * B163_WORDS * B163_BRICK_ENTRIES];
    brick.write_rom(&mut table).unwrap();
    let rom = CurveRom {
        brick: Some(&table),
        ..B163_ROM
    };
    assert_eq!(
        B163Context::from_rom(&rom).unwrap_err(),
        Error::InvalidTable {
            reason: "entry 1 does not match the curve generator"
        }
    );
}

#[test]
fn test_reducible_polynomial_is_rejected() {
    let rom = CurveRom { c: 2, ..B163_ROM };
    assert!(matches!(
        B163Context::from_rom(&rom),
        Err(Error::InvalidCurveParameters { .. })
    ));
}
