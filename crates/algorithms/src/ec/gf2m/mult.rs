//! General scalar multiplication for runtime points

use zeroize::Zeroize;

use super::curve::Curve;
use super::point::AffinePoint;
use super::projective::LdPoint;
use super::scalar::Scalar;
use crate::error::{validate, Error, Result};

impl<const W: usize> Curve<W> {
    /// Compute `scalar · point` for an arbitrary, possibly hostile, point.
    ///
    /// The point is checked against the curve equation first and rejected
    /// with `InvalidPoint` if it fails. Scalars wider than `m` bits fail
    /// with `ScalarOutOfRange`.
    pub fn multiply(&self, scalar: &Scalar<W>, point: &AffinePoint<W>) -> Result<AffinePoint<W>> {
        validate::point(self.is_on_curve(point), "general scalar multiplication")?;

        let bits = scalar.bit_length();
        let max_bits = self.field().degree();
        if bits > max_bits {
            return Err(Error::ScalarOutOfRange { bits, max_bits });
        }
        if point.is_identity() || bits == 0 {
            return Ok(AffinePoint::identity());
        }

        // Left-to-right double-and-add
        let mut acc = LdPoint::identity();
        for i in (0..bits).rev() {
            acc = self.ld_double(&acc);
            if scalar.bit(i) {
                acc = self.ld_add_mixed(&acc, point);
            }
        }
        let result = self.ld_to_affine(&acc);
        acc.zeroize();
        result
    }
}
