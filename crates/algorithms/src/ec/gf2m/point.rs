//! Affine points on a binary curve

use subtle::Choice;
use zeroize::Zeroize;

use super::field::FieldElement;

/// A point on `Y^2 + XY = X^3 + A·X^2 + B` in affine coordinates
///
/// The point at infinity carries no coordinates; its `x` and `y` are zero and
/// must not be read.
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct AffinePoint<const W: usize> {
    #[zeroize(skip)]
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement<W>,
    pub(crate) y: FieldElement<W>,
}

impl<const W: usize> PartialEq for AffinePoint<W> {
    fn eq(&self, other: &Self) -> bool {
        let self_is_identity: bool = self.is_identity.into();
        let other_is_identity: bool = other.is_identity.into();

        if self_is_identity || other_is_identity {
            return self_is_identity == other_is_identity;
        }

        self.x == other.x && self.y == other.y
    }
}

impl<const W: usize> Eq for AffinePoint<W> {}

impl<const W: usize> AffinePoint<W> {
    /// Create the identity point (point at infinity).
    pub fn identity() -> Self {
        AffinePoint {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Create a point from coordinates without checking the curve equation.
    ///
    /// Use [`Curve::point`](super::Curve::point) for values that have not
    /// been validated; this constructor exists for tables and tests.
    pub fn new_unchecked(x: FieldElement<W>, y: FieldElement<W>) -> Self {
        AffinePoint {
            is_identity: Choice::from(0),
            x,
            y,
        }
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// The x-coordinate (zero for the identity)
    pub fn x(&self) -> &FieldElement<W> {
        &self.x
    }

    /// The y-coordinate (zero for the identity)
    pub fn y(&self) -> &FieldElement<W> {
        &self.y
    }

    /// Both coordinates, or `None` for the identity
    pub fn coordinates(&self) -> Option<(FieldElement<W>, FieldElement<W>)> {
        if self.is_identity() {
            None
        } else {
            Some((self.x, self.y))
        }
    }
}
