//! Generic binary curve engine
//!
//! Curves have the form `Y^2 + XY = X^3 + A·X^2 + B` over GF(2^m). All types
//! take the element width `W` (32-bit words) as a const parameter; brick
//! tables additionally take their entry count `N`.

mod brick;
mod codec;
mod context;
mod curve;
mod field;
mod mult;
mod point;
mod projective;
mod scalar;

pub use brick::Brick;
pub use codec::CompressedPoint;
pub use context::{CurveContext, CurveParameters, CurveRom};
pub use curve::Curve;
pub use field::{BinaryField, FieldElement, WideElement};
pub use point::AffinePoint;
pub use scalar::Scalar;
