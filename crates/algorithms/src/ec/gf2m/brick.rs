//! Fixed-base comb multiplication ("brick")
//!
//! The scalar's `comb_length` bits are laid out as a `window × t` grid with
//! `t = ⌈comb_length / window⌉`. Table entry `i` holds
//! `Σ_j bit_j(i) · 2^(j·t) · G`, so one column of the grid selects one entry
//! and a whole multiplication is `t` doublings and at most `t` additions.
//!
//! The table only ever describes one generator. Multiplying arbitrary points
//! goes through [`Curve::multiply`] instead.

use zeroize::Zeroize;

use super::curve::Curve;
use super::field::FieldElement;
use super::point::AffinePoint;
use super::projective::LdPoint;
use super::scalar::Scalar;
use crate::error::{validate, Error, Result};

/// Precomputed multiples of a fixed generator, `N = 2^window` entries
#[derive(Clone, Debug)]
pub struct Brick<const W: usize, const N: usize> {
    curve: Curve<W>,
    table: [AffinePoint<W>; N],
    window: usize,
    comb_length: usize,
    columns: usize,
}

impl<const W: usize, const N: usize> Brick<W, N> {
    /// Load and validate a ROM table.
    ///
    /// `rom` holds `N` entries of `W` x-words then `W` y-words, little-endian.
    /// Entry 0 must be the all-zero sentinel for the point at infinity, every
    /// other entry must lie on `curve`, and the entries must follow the comb
    /// layout for the generator in entry 1.
    pub fn build(curve: Curve<W>, rom: &[u32], window: usize, comb_length: usize) -> Result<Self> {
        let columns = Self::check_shape(window, comb_length)?;
        validate::table(
            rom.len() == 2 * W * N,
            "table length does not hold 2^window entries",
        )?;

        let field = *curve.field();
        let mut table = [AffinePoint::identity(); N];
        for (i, chunk) in rom.chunks_exact(2 * W).enumerate() {
            if i == 0 {
                validate::table(
                    chunk.iter().all(|&w| w == 0),
                    "entry 0 must be the point at infinity sentinel",
                )?;
                continue;
            }
            let mut x = [0u32; W];
            let mut y = [0u32; W];
            x.copy_from_slice(&chunk[..W]);
            y.copy_from_slice(&chunk[W..]);
            let (x, y) = match (field.element(x), field.element(y)) {
                (Ok(x), Ok(y)) => (x, y),
                _ => {
                    return Err(Error::InvalidTable {
                        reason: "entry has bits at or above the field degree",
                    })
                }
            };
            let p = AffinePoint::new_unchecked(x, y);
            validate::table(curve.is_on_curve(&p), "entry is not on the curve")?;
            table[i] = p;
        }

        let brick = Brick {
            curve,
            table,
            window,
            comb_length,
            columns,
        };
        brick.check_layout()?;
        Ok(brick)
    }

    /// Precompute the table for `generator` (the offline step)
    pub fn from_generator(
        curve: Curve<W>,
        generator: &AffinePoint<W>,
        window: usize,
        comb_length: usize,
    ) -> Result<Self> {
        let columns = Self::check_shape(window, comb_length)?;
        validate::point(
            !generator.is_identity() && curve.is_on_curve(generator),
            "brick generator",
        )?;

        let mut table = [AffinePoint::identity(); N];
        table[1] = *generator;
        for j in 1..window {
            table[1 << j] = curve.double_n(&table[1 << (j - 1)], columns)?;
        }
        for i in 3..N {
            if !i.is_power_of_two() {
                let high = 1usize << (usize::BITS - 1 - i.leading_zeros());
                table[i] = curve.add(&table[high], &table[i - high]);
            }
        }

        Ok(Brick {
            curve,
            table,
            window,
            comb_length,
            columns,
        })
    }

    fn check_shape(window: usize, comb_length: usize) -> Result<usize> {
        validate::table(
            window >= 1 && window < usize::BITS as usize && N == 1 << window,
            "entry count must equal 2^window",
        )?;
        validate::table(
            comb_length >= 1 && comb_length <= 32 * W,
            "comb length must fit the scalar width",
        )?;
        validate::table(comb_length >= window, "comb length is shorter than the window")?;
        Ok((comb_length + window - 1) / window)
    }

    /// `T[2^j] = 2^t · T[2^(j-1)]` and `T[h + l] = T[h] + T[l]`
    fn check_layout(&self) -> Result<()> {
        validate::table(
            !self.table[1].is_identity(),
            "entry 1 must hold the generator",
        )?;
        for j in 1..self.window {
            let expected = self.curve.double_n(&self.table[1 << (j - 1)], self.columns)?;
            validate::table(
                self.table[1 << j] == expected,
                "entries do not follow the comb layout",
            )?;
        }
        for i in 3..N {
            if !i.is_power_of_two() {
                let high = 1usize << (usize::BITS - 1 - i.leading_zeros());
                let expected = self.curve.add(&self.table[high], &self.table[i - high]);
                validate::table(
                    self.table[i] == expected,
                    "entries do not follow the comb layout",
                )?;
            }
        }
        Ok(())
    }

    /// `scalar · G`; fails with `ScalarOutOfRange` when `scalar ≥ 2^comb_length`
    pub fn multiply(&self, scalar: &Scalar<W>) -> Result<AffinePoint<W>> {
        let bits = scalar.bit_length();
        if bits > self.comb_length {
            return Err(Error::ScalarOutOfRange {
                bits,
                max_bits: self.comb_length,
            });
        }

        let mut acc = LdPoint::identity();
        let mut index = 0usize;
        for i in (0..self.columns).rev() {
            acc = self.curve.ld_double(&acc);
            index = 0;
            for j in 0..self.window {
                if scalar.bit(i + j * self.columns) {
                    index |= 1 << j;
                }
            }
            if index != 0 {
                acc = self.curve.ld_add_mixed(&acc, &self.table[index]);
            }
        }
        let result = self.curve.ld_to_affine(&acc);
        acc.zeroize();
        index.zeroize();
        result
    }

    /// Window size in bits
    pub fn window(&self) -> usize {
        self.window
    }

    /// Largest supported scalar bit length
    pub fn comb_length(&self) -> usize {
        self.comb_length
    }

    /// The fixed base point, entry 1
    pub fn generator(&self) -> &AffinePoint<W> {
        &self.table[1]
    }

    /// All table entries; entry 0 is the point at infinity
    pub fn entries(&self) -> &[AffinePoint<W>; N] {
        &self.table
    }

    /// The curve the table was built for
    pub fn curve(&self) -> &Curve<W> {
        &self.curve
    }

    /// Flatten the table back into the ROM layout accepted by [`Brick::build`]
    pub fn write_rom(&self, out: &mut [u32]) -> Result<()> {
        validate::length("brick table", out.len(), 2 * W * N)?;
        for (entry, chunk) in self.table.iter().zip(out.chunks_exact_mut(2 * W)) {
            let (x, y) = entry
                .coordinates()
                .unwrap_or((FieldElement::zero(), FieldElement::zero()));
            chunk[..W].copy_from_slice(x.words());
            chunk[W..].copy_from_slice(y.words());
        }
        Ok(())
    }
}

impl<const W: usize> Curve<W> {
    /// `2^k · p`
    pub(crate) fn double_n(&self, p: &AffinePoint<W>, k: usize) -> Result<AffinePoint<W>> {
        let mut acc = LdPoint::from_affine(p);
        for _ in 0..k {
            acc = self.ld_double(&acc);
        }
        self.ld_to_affine(&acc)
    }
}
