//! Private scalars
//!
//! A scalar is a plain unsigned integer of at most `32 * W` bits. It is not
//! reduced modulo the group order; keeping it below the order is the
//! caller's concern.

use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

/// Secret scalar stored as `W` little-endian words; wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar<const W: usize>([u32; W]);

impl<const W: usize> Scalar<W> {
    /// Create a scalar from little-endian words
    pub fn from_words(words: [u32; W]) -> Self {
        Scalar(words)
    }

    /// Create a scalar from big-endian bytes (at most `4 * W` of them)
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        validate::max_length("scalar", bytes.len(), 4 * W)?;
        let mut scalar = Scalar([0u32; W]);
        for (i, &byte) in bytes.iter().rev().enumerate() {
            scalar.0[i / 4] |= (byte as u32) << (8 * (i % 4));
        }
        Ok(scalar)
    }

    /// Write the scalar as big-endian bytes into `out`.
    ///
    /// `out` may be shorter than `4 * W` bytes as long as the dropped high
    /// bytes are zero.
    pub fn to_be_bytes(&self, out: &mut [u8]) -> Result<()> {
        validate::max_length("scalar", (self.bit_length() + 7) / 8, out.len())?;
        for (i, byte) in out.iter_mut().rev().enumerate() {
            *byte = if i / 4 < W {
                (self.0[i / 4] >> (8 * (i % 4))) as u8
            } else {
                0
            };
        }
        Ok(())
    }

    /// Draw exactly `bits` uniformly random bits
    pub fn random_bits<R: CryptoRng + RngCore>(rng: &mut R, bits: usize) -> Result<Self> {
        validate::parameter(bits <= 32 * W, "scalar", "more random bits than the scalar holds")?;
        let mut scalar = Scalar([0u32; W]);
        for (i, w) in scalar.0.iter_mut().enumerate() {
            let low = 32 * i;
            if low >= bits {
                break;
            }
            *w = rng.next_u32();
            if bits - low < 32 {
                *w &= (1u32 << (bits - low)) - 1;
            }
        }
        Ok(scalar)
    }

    /// Little-endian words
    pub fn words(&self) -> &[u32; W] {
        &self.0
    }

    /// Bit `i`; false beyond the scalar width
    pub fn bit(&self, i: usize) -> bool {
        let word = i / 32;
        word < W && (self.0[word] >> (i % 32)) & 1 == 1
    }

    /// Position of the highest set bit plus one; zero for zero
    pub fn bit_length(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| **w != 0)
            .map_or(0, |(i, &w)| 32 * i + 32 - w.leading_zeros() as usize)
    }

    /// Check if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }
}

impl<const W: usize> fmt::Debug for Scalar<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar<{}>([REDACTED])", W)
    }
}
