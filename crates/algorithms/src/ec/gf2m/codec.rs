//! Point compression and its wire encoding
//!
//! A compressed point is its x-coordinate plus one selector bit, the least
//! significant bit of `y / x`. On the wire it is `tag || x` with `x` as
//! `⌈m/8⌉` big-endian bytes and `tag = 0x02 + bit`. The point at infinity is
//! reserved as the all-zero encoding.

use super::curve::Curve;
use super::field::{BinaryField, FieldElement};
use super::point::AffinePoint;
use crate::error::{validate, Error, Result};

const TAG_INFINITY: u8 = 0x00;
const TAG_EVEN: u8 = 0x02;
const TAG_ODD: u8 = 0x03;

/// A point reduced to its x-coordinate and a selector bit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompressedPoint<const W: usize> {
    /// The reserved sentinel for the point at infinity
    Infinity,
    /// A finite point
    Coordinates {
        /// The x-coordinate
        x: FieldElement<W>,
        /// Which of the two y-values (lsb of `y / x`)
        bit: bool,
    },
}

impl<const W: usize> CompressedPoint<W> {
    /// Bytes in the encoding for `field`: one tag byte plus `⌈m/8⌉`
    pub fn encoded_len(field: &BinaryField<W>) -> usize {
        1 + field.byte_len()
    }

    /// Check if this is the infinity sentinel
    pub fn is_infinity(&self) -> bool {
        matches!(self, CompressedPoint::Infinity)
    }

    /// Write `tag || x` into `out`, which must be exactly `encoded_len` bytes
    pub fn encode(&self, field: &BinaryField<W>, out: &mut [u8]) -> Result<()> {
        validate::length("compressed point", out.len(), Self::encoded_len(field))?;
        match self {
            CompressedPoint::Infinity => {
                out.iter_mut().for_each(|b| *b = 0);
            }
            CompressedPoint::Coordinates { x, bit } => {
                out[0] = if *bit { TAG_ODD } else { TAG_EVEN };
                field.to_be_bytes(x, &mut out[1..])?;
            }
        }
        Ok(())
    }

    /// Parse `tag || x`.
    ///
    /// Only checks the framing and that `x` is a field element; whether `x`
    /// lies on a curve is decided by [`Curve::decompress`].
    pub fn decode(field: &BinaryField<W>, bytes: &[u8]) -> Result<Self> {
        validate::length("compressed point", bytes.len(), Self::encoded_len(field))?;
        let (tag, x_bytes) = (bytes[0], &bytes[1..]);
        match tag {
            TAG_INFINITY => {
                validate::parameter(
                    x_bytes.iter().all(|&b| b == 0),
                    "compressed point",
                    "infinity encoding must be all zero",
                )?;
                Ok(CompressedPoint::Infinity)
            }
            TAG_EVEN | TAG_ODD => {
                let x = field.from_be_bytes(x_bytes).map_err(|_| Error::DecompressionFailure {
                    reason: "x-coordinate has bits at or above the field degree",
                })?;
                Ok(CompressedPoint::Coordinates {
                    x,
                    bit: tag == TAG_ODD,
                })
            }
            _ => Err(Error::param("compressed point", "unknown tag byte")),
        }
    }
}

impl<const W: usize> Curve<W> {
    /// Compress `p` to its x-coordinate and selector bit
    pub fn compress(&self, p: &AffinePoint<W>) -> Result<CompressedPoint<W>> {
        if p.is_identity() {
            return Ok(CompressedPoint::Infinity);
        }
        let bit = if p.x.is_zero() {
            false
        } else {
            let f = self.field();
            f.mul(&p.y, &f.invert(&p.x)?).bit(0)
        };
        Ok(CompressedPoint::Coordinates { x: p.x, bit })
    }

    /// Recover the full point; `DecompressionFailure` when x is not on the curve
    pub fn decompress(&self, c: &CompressedPoint<W>) -> Result<AffinePoint<W>> {
        match c {
            CompressedPoint::Infinity => Ok(AffinePoint::identity()),
            CompressedPoint::Coordinates { x, bit } => {
                let y = self.solve_y(x, *bit)?;
                Ok(AffinePoint::new_unchecked(*x, y))
            }
        }
    }
}
