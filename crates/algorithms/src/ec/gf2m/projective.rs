//! López–Dahab projective coordinates
//!
//! `(X : Y : Z)` represents the affine point `(X/Z, Y/Z^2)`; `Z = 0` is the
//! point at infinity. Both scalar multipliers accumulate in this form so a
//! whole multiplication costs a single field inversion.

use zeroize::Zeroize;

use super::curve::Curve;
use super::field::FieldElement;
use super::point::AffinePoint;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Zeroize)]
pub(crate) struct LdPoint<const W: usize> {
    x: FieldElement<W>,
    y: FieldElement<W>,
    z: FieldElement<W>,
}

impl<const W: usize> LdPoint<W> {
    pub(crate) fn identity() -> Self {
        LdPoint {
            x: FieldElement::one(),
            y: FieldElement::zero(),
            z: FieldElement::zero(),
        }
    }

    pub(crate) fn from_affine(p: &AffinePoint<W>) -> Self {
        if p.is_identity() {
            return Self::identity();
        }
        LdPoint {
            x: p.x,
            y: p.y,
            z: FieldElement::one(),
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }
}

impl<const W: usize> Curve<W> {
    /// Projective doubling
    pub(crate) fn ld_double(&self, p: &LdPoint<W>) -> LdPoint<W> {
        if p.z.is_zero() || p.x.is_zero() {
            return LdPoint::identity();
        }
        let f = self.field();

        let x1_sq = f.square(&p.x);
        let z1_sq = f.square(&p.z);
        let b_z1_4 = f.mul(self.b(), &f.square(&z1_sq));

        let z3 = f.mul(&x1_sq, &z1_sq);
        let x3 = f.square(&x1_sq).add(&b_z1_4);
        let inner = f
            .mul(self.a(), &z3)
            .add(&f.square(&p.y))
            .add(&b_z1_4);
        let y3 = f.mul(&b_z1_4, &z3).add(&f.mul(&x3, &inner));

        LdPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Mixed addition of a projective and an affine point
    pub(crate) fn ld_add_mixed(&self, p: &LdPoint<W>, q: &AffinePoint<W>) -> LdPoint<W> {
        if q.is_identity() {
            return *p;
        }
        if p.z.is_zero() {
            return LdPoint::from_affine(q);
        }
        let f = self.field();

        let z1_sq = f.square(&p.z);
        let a = f.mul(&q.y, &z1_sq).add(&p.y);
        let b = f.mul(&q.x, &p.z).add(&p.x);

        if b.is_zero() {
            // Same x-coordinate: either q itself or its negative.
            if a.is_zero() {
                return self.ld_double(&LdPoint::from_affine(q));
            }
            return LdPoint::identity();
        }

        let c = f.mul(&p.z, &b);
        let d = f.mul(&f.square(&b), &c.add(&f.mul(self.a(), &z1_sq)));
        let z3 = f.square(&c);
        let e = f.mul(&a, &c);
        let x3 = f.square(&a).add(&d).add(&e);
        let g = f.mul(&q.x.add(&q.y), &f.square(&z3));
        let y3 = f
            .mul(&e.add(&z3), &x3.add(&f.mul(&q.x, &z3)))
            .add(&g);

        LdPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Convert back to affine with one inversion
    pub(crate) fn ld_to_affine(&self, p: &LdPoint<W>) -> Result<AffinePoint<W>> {
        if p.is_identity() {
            return Ok(AffinePoint::identity());
        }
        let f = self.field();
        let mut z_inv = f.invert(&p.z)?;
        let mut z_inv2 = f.square(&z_inv);
        let x = f.mul(&p.x, &z_inv);
        let y = f.mul(&p.y, &z_inv2);
        z_inv.zeroize();
        z_inv2.zeroize();
        Ok(AffinePoint::new_unchecked(x, y))
    }
}
