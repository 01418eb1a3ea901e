//! NIST B-163 binary curve
//!
//! This module binds the generic engine to B-163:
//! - Curve: y² + xy = x³ + x² + b over GF(2^163)
//! - Field polynomial: x^163 + x^7 + x^6 + x^3 + 1
//! - Brick: window 4 over a 163-bit comb, loaded from the shipped ROM table

use gfecdh_params::b163 as params;

use super::gf2m::{
    AffinePoint, CompressedPoint, CurveContext, CurveRom, FieldElement, Scalar,
};
use crate::error::Result;

/// 32-bit words per B-163 field element
pub const B163_WORDS: usize = params::WORDS;

/// Entries in the B-163 brick table
pub const B163_BRICK_ENTRIES: usize = params::BRICK_ENTRIES;

/// Bytes in a B-163 field element or scalar
pub const B163_FIELD_ELEMENT_SIZE: usize = gfecdh_params::ecdh::ECDH_B163_FIELD_ELEMENT_SIZE;

/// Bytes in a compressed B-163 point
pub const B163_POINT_COMPRESSED_SIZE: usize = gfecdh_params::ecdh::ECDH_B163_PUBLIC_KEY_SIZE;

/// B-163 field element
pub type B163FieldElement = FieldElement<B163_WORDS>;
/// B-163 affine point
pub type B163Point = AffinePoint<B163_WORDS>;
/// B-163 compressed point
pub type B163CompressedPoint = CompressedPoint<B163_WORDS>;
/// B-163 scalar
pub type B163Scalar = Scalar<B163_WORDS>;
/// B-163 curve context with its 16-entry brick table
pub type B163Context = CurveContext<B163_WORDS, B163_BRICK_ENTRIES>;

/// The B-163 curve in ROM layout
pub const B163_ROM: CurveRom<'static, B163_WORDS> = CurveRom {
    m: params::M,
    a: params::A_EXP,
    b: params::B_EXP,
    c: params::C_EXP,
    coeff_a: params::COEFF_A,
    parameters: &params::ROM,
    brick: Some(&params::BRICK_ROM),
    window: params::WINDOW,
    comb_length: params::COMB_LENGTH,
};

/// Load and validate the B-163 context
pub fn context() -> Result<B163Context> {
    B163Context::from_rom(&B163_ROM)
}

#[cfg(test)]
mod tests;
