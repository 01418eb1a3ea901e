//! The curve `Y^2 + XY = X^3 + A·X^2 + B` over GF(2^m)

use super::field::{BinaryField, FieldElement};
use super::point::AffinePoint;
use crate::error::{validate, Error, Result};

/// A non-supersingular binary curve with its field
///
/// Immutable once built; safe to share across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve<const W: usize> {
    field: BinaryField<W>,
    a: FieldElement<W>,
    b: FieldElement<W>,
}

impl<const W: usize> Curve<W> {
    /// Build a curve from its coefficients.
    ///
    /// `B` must be non-zero (otherwise the curve is singular) and both
    /// coefficients must be reduced elements of `field`.
    pub fn new(field: BinaryField<W>, a: FieldElement<W>, b: FieldElement<W>) -> Result<Self> {
        validate::curve(
            field.is_reduced(&a) && field.is_reduced(&b),
            "coefficients must be elements of the field",
        )?;
        validate::curve(!b.is_zero(), "coefficient B must be non-zero")?;
        Ok(Curve { field, a, b })
    }

    /// The underlying field
    pub fn field(&self) -> &BinaryField<W> {
        &self.field
    }

    /// Coefficient A
    pub fn a(&self) -> &FieldElement<W> {
        &self.a
    }

    /// Coefficient B
    pub fn b(&self) -> &FieldElement<W> {
        &self.b
    }

    /// Check `y^2 + xy = x^3 + A·x^2 + B`.
    ///
    /// The identity is a group element and passes. Coordinates with bits at
    /// or above `m` never pass.
    pub fn is_on_curve(&self, p: &AffinePoint<W>) -> bool {
        if p.is_identity() {
            return true;
        }
        let f = &self.field;
        if !f.is_reduced(&p.x) || !f.is_reduced(&p.y) {
            return false;
        }
        let x2 = f.square(&p.x);
        let lhs = f.square(&p.y).add(&f.mul(&p.x, &p.y));
        let rhs = f
            .mul(&x2, &p.x)
            .add(&f.mul(&self.a, &x2))
            .add(&self.b);
        lhs == rhs
    }

    /// Checked point constructor
    pub fn point(&self, x: FieldElement<W>, y: FieldElement<W>) -> Result<AffinePoint<W>> {
        let p = AffinePoint::new_unchecked(x, y);
        validate::point(self.is_on_curve(&p), "curve point")?;
        Ok(p)
    }

    /// `-p = (x, x + y)`
    pub fn negate(&self, p: &AffinePoint<W>) -> AffinePoint<W> {
        if p.is_identity() {
            return *p;
        }
        AffinePoint::new_unchecked(p.x, p.x.add(&p.y))
    }

    /// Double a point (add it to itself).
    ///
    /// A point with `x = 0` is its own negative, so doubling it yields the
    /// identity.
    pub fn double(&self, p: &AffinePoint<W>) -> AffinePoint<W> {
        if p.is_identity() || p.x.is_zero() {
            return AffinePoint::identity();
        }
        let f = &self.field;
        let x_inv = match f.invert(&p.x) {
            Ok(v) => v,
            Err(_) => return AffinePoint::identity(),
        };

        let lambda = p.x.add(&f.mul(&p.y, &x_inv));
        let x2 = f.square(&lambda).add(&lambda).add(&self.a);
        let y2 = f.square(&p.x).add(&f.mul(&lambda, &x2)).add(&x2);
        AffinePoint::new_unchecked(x2, y2)
    }

    /// Add two points using the chord rule for binary curves.
    pub fn add(&self, p: &AffinePoint<W>, q: &AffinePoint<W>) -> AffinePoint<W> {
        if p.is_identity() {
            return *q;
        }
        if q.is_identity() {
            return *p;
        }

        if p.x == q.x {
            if p.y == q.y {
                return self.double(p);
            } else {
                return AffinePoint::identity();
            }
        }

        let f = &self.field;
        let dx = p.x.add(&q.x);
        let dx_inv = match f.invert(&dx) {
            Ok(v) => v,
            Err(_) => return AffinePoint::identity(),
        };
        let lambda = f.mul(&p.y.add(&q.y), &dx_inv);
        let x3 = f.square(&lambda).add(&lambda).add(&dx).add(&self.a);
        let y3 = f.mul(&lambda, &p.x.add(&x3)).add(&x3).add(&p.y);
        AffinePoint::new_unchecked(x3, y3)
    }

    /// Recover y from x and the selector bit.
    ///
    /// With `z = y / x` the curve equation becomes `z^2 + z = x + A + B/x^2`;
    /// the selector picks the root whose least significant bit equals `bit`.
    /// For `x = 0` the only point is `(0, sqrt(B))` and the selector must be
    /// clear.
    pub fn solve_y(&self, x: &FieldElement<W>, bit: bool) -> Result<FieldElement<W>> {
        let f = &self.field;
        if !f.is_reduced(x) {
            return Err(Error::DecompressionFailure {
                reason: "x-coordinate has bits at or above the field degree",
            });
        }
        if x.is_zero() {
            if bit {
                return Err(Error::DecompressionFailure {
                    reason: "selector bit must be clear when x = 0",
                });
            }
            return Ok(f.sqrt(&self.b));
        }

        let x2_inv = f.invert(&f.square(x))?;
        let beta = x.add(&self.a).add(&f.mul(&self.b, &x2_inv));
        let mut z = f.solve_quadratic(&beta).ok_or(Error::DecompressionFailure {
            reason: "x-coordinate is not on the curve",
        })?;
        if z.bit(0) != bit {
            z = z.add(&FieldElement::one());
        }
        Ok(f.mul(x, &z))
    }
}
