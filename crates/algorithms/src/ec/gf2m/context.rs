//! Immutable curve contexts shared by every session
//!
//! A context bundles the validated curve, its generator and group order, and
//! the brick table for that generator. It is built once, never mutated, and
//! handed to sessions by shared reference.

use tracing::debug;

use super::brick::Brick;
use super::curve::Curve;
use super::field::{BinaryField, FieldElement};
use super::point::AffinePoint;
use crate::error::{validate, Result};

/// A curve described the way constrained targets store it in ROM
#[derive(Clone, Copy, Debug)]
pub struct CurveRom<'a, const W: usize> {
    /// Field degree m
    pub m: usize,
    /// Reduction exponent a
    pub a: usize,
    /// Reduction exponent b (0 for a trinomial)
    pub b: usize,
    /// Reduction exponent c (0 for a trinomial)
    pub c: usize,
    /// Curve coefficient A
    pub coeff_a: [u32; W],
    /// `B`, `q`, `x_G`, `y_G`, each `W` little-endian words
    pub parameters: &'a [u32],
    /// Brick table in ROM layout, or `None` to generate it from G
    pub brick: Option<&'a [u32]>,
    /// Brick window size
    pub window: usize,
    /// Brick comb length
    pub comb_length: usize,
}

/// Validated curve parameters: field, coefficients, generator and order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveParameters<const W: usize> {
    /// The curve with its field
    pub curve: Curve<W>,
    /// The published generator
    pub generator: AffinePoint<W>,
    /// The group order q, little-endian words (not used by the arithmetic)
    pub order: [u32; W],
}

impl<const W: usize> CurveParameters<W> {
    /// Parse a parameter ROM of `B`, `q`, `x_G`, `y_G`
    pub fn from_rom(
        m: usize,
        a: usize,
        b: usize,
        c: usize,
        coeff_a: [u32; W],
        rom: &[u32],
    ) -> Result<Self> {
        validate::curve(
            rom.len() == 4 * W,
            "parameter table must hold B, q, x_G and y_G",
        )?;
        let field = BinaryField::new(m, a, b, c)?;

        let word = |k: usize| {
            let mut out = [0u32; W];
            out.copy_from_slice(&rom[k * W..(k + 1) * W]);
            out
        };

        let curve = Curve::new(
            field,
            FieldElement::from_words_unchecked(coeff_a),
            FieldElement::from_words_unchecked(word(0)),
        )?;
        let generator = AffinePoint::new_unchecked(
            FieldElement::from_words_unchecked(word(2)),
            FieldElement::from_words_unchecked(word(3)),
        );
        validate::curve(
            curve.is_on_curve(&generator),
            "generator is not on the curve",
        )?;

        Ok(CurveParameters {
            curve,
            generator,
            order: word(1),
        })
    }
}

/// Everything a session needs: curve, generator, order and brick table
#[derive(Clone, Debug)]
pub struct CurveContext<const W: usize, const N: usize> {
    curve: Curve<W>,
    generator: AffinePoint<W>,
    order: [u32; W],
    brick: Brick<W, N>,
}

impl<const W: usize, const N: usize> CurveContext<W, N> {
    /// Build from validated parameters, generating the brick table from G
    pub fn from_parameters(
        params: CurveParameters<W>,
        window: usize,
        comb_length: usize,
    ) -> Result<Self> {
        let brick = Brick::from_generator(params.curve, &params.generator, window, comb_length)?;
        debug!(
            m = params.curve.field().degree(),
            window, comb_length, "generated brick table"
        );
        Ok(CurveContext {
            curve: params.curve,
            generator: params.generator,
            order: params.order,
            brick,
        })
    }

    /// Build from ROM tables, validating every table against the curve
    pub fn from_rom(rom: &CurveRom<'_, W>) -> Result<Self> {
        let params =
            CurveParameters::from_rom(rom.m, rom.a, rom.b, rom.c, rom.coeff_a, rom.parameters)?;

        let table = match rom.brick {
            Some(table) => table,
            None => return Self::from_parameters(params, rom.window, rom.comb_length),
        };

        let brick = Brick::build(params.curve, table, rom.window, rom.comb_length)?;
        validate::table(
            *brick.generator() == params.generator,
            "entry 1 does not match the curve generator",
        )?;
        debug!(
            m = params.curve.field().degree(),
            window = rom.window,
            comb_length = rom.comb_length,
            "loaded brick table from ROM"
        );

        Ok(CurveContext {
            curve: params.curve,
            generator: params.generator,
            order: params.order,
            brick,
        })
    }

    /// The curve
    pub fn curve(&self) -> &Curve<W> {
        &self.curve
    }

    /// The field of the curve
    pub fn field(&self) -> &BinaryField<W> {
        self.curve.field()
    }

    /// The fixed generator G
    pub fn generator(&self) -> &AffinePoint<W> {
        &self.generator
    }

    /// The group order q (little-endian words)
    pub fn order(&self) -> &[u32; W] {
        &self.order
    }

    /// The brick table for G
    pub fn brick(&self) -> &Brick<W, N> {
        &self.brick
    }
}
