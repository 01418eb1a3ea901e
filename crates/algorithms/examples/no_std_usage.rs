// Demonstrates the primitives with nothing but fixed-size stack buffers,
// the way they run on a constrained target.
#![cfg_attr(not(feature = "std"), no_std)]

use gfecdh_algorithms::ec::b163::{
    context, B163Scalar, B163_FIELD_ELEMENT_SIZE, B163_POINT_COMPRESSED_SIZE,
};
use gfecdh_algorithms::ec::gf2m::CompressedPoint;
use gfecdh_algorithms::Error;

// Fixed-base multiplication through the brick table, then compression
fn public_value(scalar: &B163Scalar) -> Result<[u8; B163_POINT_COMPRESSED_SIZE], Error> {
    let ctx = context()?;
    let p = ctx.brick().multiply(scalar)?;

    let mut out = [0u8; B163_POINT_COMPRESSED_SIZE];
    ctx.curve().compress(&p)?.encode(ctx.field(), &mut out)?;
    Ok(out)
}

// Decompress a received value and multiply it with the general multiplier
fn shared_x(
    scalar: &B163Scalar,
    peer: &[u8; B163_POINT_COMPRESSED_SIZE],
) -> Result<[u8; B163_FIELD_ELEMENT_SIZE], Error> {
    let ctx = context()?;
    let q = ctx
        .curve()
        .decompress(&CompressedPoint::decode(ctx.field(), peer)?)?;
    let k = ctx.curve().multiply(scalar, &q)?;

    let mut out = [0u8; B163_FIELD_ELEMENT_SIZE];
    let x = k.x();
    ctx.field().to_be_bytes(x, &mut out)?;
    Ok(out)
}

#[cfg(feature = "std")]
fn main() -> Result<(), Error> {
    let a = B163Scalar::from_words([0x1234_5678, 0x9abc_def0, 0, 0, 0, 0]);
    let b = B163Scalar::from_words([0x0fed_cba9, 0x8765_4321, 0x1111, 0, 0, 0]);

    let pa = public_value(&a)?;
    let pb = public_value(&b)?;
    let ka = shared_x(&a, &pb)?;
    let kb = shared_x(&b, &pa)?;

    println!("A sends   {:02x?}", pa);
    println!("B sends   {:02x?}", pb);
    println!("agreement {}", if ka == kb { "ok" } else { "FAILED" });
    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}
