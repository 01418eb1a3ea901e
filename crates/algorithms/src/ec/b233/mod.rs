//! NIST B-233 binary curve
//!
//! - Curve: y² + xy = x³ + x² + b over GF(2^233)
//! - Field polynomial: x^233 + x^74 + 1
//!
//! No brick table is shipped; [`context`] precomputes it from the generator.

use gfecdh_params::b233 as params;

use super::gf2m::{AffinePoint, CurveContext, CurveRom, Scalar};
use crate::error::Result;

/// 32-bit words per B-233 field element
pub const B233_WORDS: usize = params::WORDS;

/// Entries in the B-233 brick table
pub const B233_BRICK_ENTRIES: usize = params::BRICK_ENTRIES;

/// B-233 affine point
pub type B233Point = AffinePoint<B233_WORDS>;
/// B-233 scalar
pub type B233Scalar = Scalar<B233_WORDS>;
/// B-233 curve context
pub type B233Context = CurveContext<B233_WORDS, B233_BRICK_ENTRIES>;

/// The B-233 curve in ROM layout
pub const B233_ROM: CurveRom<'static, B233_WORDS> = CurveRom {
    m: params::M,
    a: params::A_EXP,
    b: params::B_EXP,
    c: params::C_EXP,
    coeff_a: params::COEFF_A,
    parameters: &params::ROM,
    brick: None,
    window: params::WINDOW,
    comb_length: params::COMB_LENGTH,
};

/// Build the B-233 context, generating its brick table
pub fn context() -> Result<B233Context> {
    B233Context::from_rom(&B233_ROM)
}

#[cfg(test)]
mod tests;
