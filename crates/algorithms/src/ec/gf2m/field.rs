//! Arithmetic in GF(2^m) modulo a sparse reduction polynomial
//!
//! Elements are polynomials over GF(2) stored as `W` little-endian 32-bit
//! words. The reduction polynomial is `x^m + x^a + x^b + x^c + 1` (or the
//! trinomial `x^m + x^a + 1` when `b = c = 0`) and is applied term by term
//! with shifts and XORs, never by general polynomial division.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

const WORD_BITS: usize = 32;

/// An element of GF(2^m) held in `W` little-endian words
///
/// The field itself lives in [`BinaryField`]; an element only carries its
/// bits. Elements produced by a field never have a bit set at or above `m`.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct FieldElement<const W: usize>(pub(crate) [u32; W]);

impl<const W: usize> FieldElement<W> {
    /// The additive identity
    pub const fn zero() -> Self {
        FieldElement([0u32; W])
    }

    /// The multiplicative identity
    pub const fn one() -> Self {
        let mut words = [0u32; W];
        words[0] = 1;
        FieldElement(words)
    }

    /// Wrap raw words without checking them against a field degree
    pub(crate) const fn from_words_unchecked(words: [u32; W]) -> Self {
        FieldElement(words)
    }

    /// Return the underlying words, least significant first
    pub fn words(&self) -> &[u32; W] {
        &self.0
    }

    /// Check if this element is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Check if this element is one
    pub fn is_one(&self) -> bool {
        self.0[0] == 1 && self.0[1..].iter().all(|&w| w == 0)
    }

    /// Field addition (XOR); every element is its own negative
    pub fn add(&self, other: &Self) -> Self {
        let mut out = *self;
        for (o, w) in out.0.iter_mut().zip(other.0.iter()) {
            *o ^= w;
        }
        out
    }

    /// Coefficient of `x^i`
    pub fn bit(&self, i: usize) -> bool {
        let word = i / WORD_BITS;
        word < W && (self.0[word] >> (i % WORD_BITS)) & 1 == 1
    }

    /// Degree of the polynomial, `None` for zero
    pub fn degree(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| **w != 0)
            .map(|(i, &w)| i * WORD_BITS + (WORD_BITS - 1 - w.leading_zeros() as usize))
    }

    /// `self ^= other * x^shift`, dropping bits beyond the element width
    fn xor_shifted(&mut self, other: &Self, shift: usize) {
        let words = shift / WORD_BITS;
        let bits = shift % WORD_BITS;
        for i in (words..W).rev() {
            let src = i - words;
            let mut v = other.0[src] << bits;
            if bits != 0 && src > 0 {
                v |= other.0[src - 1] >> (WORD_BITS - bits);
            }
            self.0[i] ^= v;
        }
    }

    fn monomial(i: usize) -> Self {
        let mut out = Self::zero();
        out.0[i / WORD_BITS] = 1 << (i % WORD_BITS);
        out
    }
}

impl<const W: usize> ConstantTimeEq for FieldElement<W> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl<const W: usize> fmt::Debug for FieldElement<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x")?;
        for w in self.0.iter().rev() {
            write!(f, "{:08x}", w)?;
        }
        write!(f, ")")
    }
}

/// A double-width polynomial, the unreduced output of `mul` and `square`
///
/// Stored as two halves because `[u32; 2 * W]` cannot be spelled with a
/// const generic parameter on stable Rust.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct WideElement<const W: usize> {
    lo: [u32; W],
    hi: [u32; W],
}

impl<const W: usize> WideElement<W> {
    /// An all-zero product buffer
    pub const fn zero() -> Self {
        WideElement {
            lo: [0u32; W],
            hi: [0u32; W],
        }
    }

    /// Build from the low and high halves (`lo` holds words `0..W`)
    pub const fn from_halves(lo: [u32; W], hi: [u32; W]) -> Self {
        WideElement { lo, hi }
    }

    #[inline(always)]
    fn get(&self, i: usize) -> u32 {
        if i < W {
            self.lo[i]
        } else {
            self.hi[i - W]
        }
    }

    #[inline(always)]
    fn set(&mut self, i: usize, v: u32) {
        if i < W {
            self.lo[i] = v;
        } else {
            self.hi[i - W] = v;
        }
    }

    #[inline(always)]
    fn xor_at(&mut self, i: usize, v: u32) {
        if i < W {
            self.lo[i] ^= v;
        } else {
            self.hi[i - W] ^= v;
        }
    }

    fn shl1(&mut self) {
        for i in (1..2 * W).rev() {
            let v = (self.get(i) << 1) | (self.get(i - 1) >> (WORD_BITS - 1));
            self.set(i, v);
        }
        self.lo[0] <<= 1;
    }
}

/// GF(2^m) defined by a trinomial or pentanomial reduction polynomial
///
/// Construction validates the polynomial shape and its irreducibility, so
/// every `BinaryField` value describes a real field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryField<const W: usize> {
    m: usize,
    a: usize,
    b: usize,
    c: usize,
    taps: [usize; 4],
    tap_count: usize,
}

impl<const W: usize> BinaryField<W> {
    /// Build the field for `x^m + x^a + x^b + x^c + 1`.
    ///
    /// Pass `b = c = 0` for the trinomial `x^m + x^a + 1`. The degree must
    /// leave one spare bit in `W` words (`m < 32 * W`) so the modulus itself
    /// fits in an element during inversion.
    pub fn new(m: usize, a: usize, b: usize, c: usize) -> Result<Self> {
        validate::curve(
            W > 0 && m >= 2 && m < W * WORD_BITS,
            "field degree does not fit the element width",
        )?;

        let trinomial = b == 0 && c == 0;
        let shape_ok = if trinomial {
            a > 0 && a < m
        } else {
            m > a && a > b && b > c && c > 0
        };
        validate::curve(
            shape_ok,
            "reduction exponents must satisfy m > a > b > c > 0 or b = c = 0",
        )?;

        let field = if trinomial {
            BinaryField {
                m,
                a,
                b,
                c,
                taps: [0, a, 0, 0],
                tap_count: 2,
            }
        } else {
            BinaryField {
                m,
                a,
                b,
                c,
                taps: [0, a, b, c],
                tap_count: 4,
            }
        };

        validate::curve(field.is_irreducible(), "reduction polynomial is reducible")?;
        Ok(field)
    }

    /// Field degree m
    pub fn degree(&self) -> usize {
        self.m
    }

    /// Reduction exponents `(a, b, c)`
    pub fn exponents(&self) -> (usize, usize, usize) {
        (self.a, self.b, self.c)
    }

    /// Bytes in a big-endian encoding of one element, `⌈m/8⌉`
    pub fn byte_len(&self) -> usize {
        (self.m + 7) / 8
    }

    /// The reduction polynomial itself (degree m)
    pub fn modulus(&self) -> FieldElement<W> {
        let mut f = FieldElement::monomial(self.m);
        for &e in self.taps() {
            f.0[e / WORD_BITS] ^= 1 << (e % WORD_BITS);
        }
        f
    }

    /// Check that no bit at or above `m` is set
    pub fn is_reduced(&self, x: &FieldElement<W>) -> bool {
        x.degree().map_or(true, |d| d < self.m)
    }

    /// Wrap words as an element of this field, rejecting bits at or above `m`
    pub fn element(&self, words: [u32; W]) -> Result<FieldElement<W>> {
        let x = FieldElement(words);
        validate::parameter(
            self.is_reduced(&x),
            "field element",
            "bits set at or above the field degree",
        )?;
        Ok(x)
    }

    /// Decode exactly `⌈m/8⌉` big-endian bytes
    pub fn from_be_bytes(&self, bytes: &[u8]) -> Result<FieldElement<W>> {
        validate::length("field element", bytes.len(), self.byte_len())?;
        let mut words = [0u32; W];
        for (i, &byte) in bytes.iter().rev().enumerate() {
            words[i / 4] |= (byte as u32) << (8 * (i % 4));
        }
        self.element(words)
    }

    /// Encode into exactly `⌈m/8⌉` big-endian bytes
    pub fn to_be_bytes(&self, x: &FieldElement<W>, out: &mut [u8]) -> Result<()> {
        validate::length("field element", out.len(), self.byte_len())?;
        for (i, byte) in out.iter_mut().rev().enumerate() {
            *byte = (x.0[i / 4] >> (8 * (i % 4))) as u8;
        }
        Ok(())
    }

    fn taps(&self) -> &[usize] {
        &self.taps[..self.tap_count]
    }

    /// Field addition
    #[inline]
    pub fn add(&self, x: &FieldElement<W>, y: &FieldElement<W>) -> FieldElement<W> {
        x.add(y)
    }

    /// Field multiplication
    pub fn mul(&self, x: &FieldElement<W>, y: &FieldElement<W>) -> FieldElement<W> {
        self.reduce(&Self::mul_wide(x, y))
    }

    /// Field squaring
    pub fn square(&self, x: &FieldElement<W>) -> FieldElement<W> {
        self.reduce(&Self::square_wide(x))
    }

    /// Field inversion; fails with `DivisionByZero` on zero
    pub fn invert(&self, x: &FieldElement<W>) -> Result<FieldElement<W>> {
        if x.is_zero() {
            return Err(Error::DivisionByZero {
                context: "field inversion",
            });
        }

        // Extended Euclid over GF(2)[x]: keeps g1 * x = u and g2 * x = v (mod f).
        let mut u = *x;
        let mut v = self.modulus();
        let mut g1 = FieldElement::one();
        let mut g2 = FieldElement::zero();

        while !u.is_one() {
            let (du, dv) = match (u.degree(), v.degree()) {
                (Some(du), Some(dv)) => (du, dv),
                _ => {
                    return Err(Error::DivisionByZero {
                        context: "field inversion",
                    })
                }
            };
            if du < dv {
                core::mem::swap(&mut u, &mut v);
                core::mem::swap(&mut g1, &mut g2);
                let j = dv - du;
                u.xor_shifted(&v, j);
                g1.xor_shifted(&g2, j);
            } else {
                let j = du - dv;
                u.xor_shifted(&v, j);
                g1.xor_shifted(&g2, j);
            }
        }
        Ok(g1)
    }

    /// Raise to the power `2^k`
    pub fn square_n(&self, x: &FieldElement<W>, k: usize) -> FieldElement<W> {
        let mut out = *x;
        for _ in 0..k {
            out = self.square(&out);
        }
        out
    }

    /// Reduce a double-width polynomial modulo the reduction polynomial
    pub fn reduce(&self, wide: &WideElement<W>) -> FieldElement<W> {
        let mut t = *wide;
        let top = self.m / WORD_BITS;
        let top_mask = u32::MAX << (self.m % WORD_BITS);

        for i in (top..2 * W).rev() {
            loop {
                let mut w = t.get(i);
                if i == top {
                    w &= top_mask;
                }
                if w == 0 {
                    break;
                }
                t.xor_at(i, w);

                // x^(32i + k) = x^(32i + k - m) * (x^a + x^b + x^c + 1)
                for &e in self.taps() {
                    let base = (WORD_BITS * i + e) as isize - self.m as isize;
                    if base < 0 {
                        t.xor_at(0, w >> (-base) as u32);
                    } else {
                        let q = base as usize / WORD_BITS;
                        let r = base as usize % WORD_BITS;
                        t.xor_at(q, w << r);
                        if r != 0 {
                            t.xor_at(q + 1, w >> (WORD_BITS - r));
                        }
                    }
                }
            }
        }
        FieldElement(t.lo)
    }

    /// Trace `Tr(x) = x + x^2 + ... + x^(2^(m-1))`, either 0 or 1
    pub fn trace(&self, x: &FieldElement<W>) -> bool {
        let mut sum = *x;
        let mut t = *x;
        for _ in 1..self.m {
            t = self.square(&t);
            sum = sum.add(&t);
        }
        sum.bit(0)
    }

    /// Half-trace `x + x^4 + x^16 + ... + x^(2^(m-1))`, defined for odd m
    pub fn half_trace(&self, x: &FieldElement<W>) -> Result<FieldElement<W>> {
        validate::parameter(self.m % 2 == 1, "half-trace", "field degree must be odd")?;
        let mut h = *x;
        let mut t = *x;
        for _ in 0..(self.m - 1) / 2 {
            t = self.square_n(&t, 2);
            h = h.add(&t);
        }
        Ok(h)
    }

    /// The unique square root, `x^(2^(m-1))`
    pub fn sqrt(&self, x: &FieldElement<W>) -> FieldElement<W> {
        self.square_n(x, self.m - 1)
    }

    /// Solve `z^2 + z = beta`.
    ///
    /// Returns one root `z`; the other is `z + 1`. `None` when `Tr(beta) = 1`
    /// and no root exists.
    pub fn solve_quadratic(&self, beta: &FieldElement<W>) -> Option<FieldElement<W>> {
        if self.trace(beta) {
            return None;
        }
        if self.m % 2 == 1 {
            return self.half_trace(beta).ok();
        }

        // Even degree: combine beta with an element of trace one.
        for k in 1..self.m {
            let tau = FieldElement::monomial(k);
            if !self.trace(&tau) {
                continue;
            }
            let mut z = FieldElement::zero();
            let mut w = *beta;
            for _ in 1..self.m {
                let w2 = self.square(&w);
                z = self.square(&z).add(&self.mul(&w2, &tau));
                w = w2.add(beta);
            }
            if !w.is_zero() {
                return None;
            }
            if self.square(&z).add(&z) == *beta {
                return Some(z);
            }
        }
        None
    }

    /// Rabin's test: `x^(2^m) = x` and `gcd(x^(2^(m/p)) - x, f) = 1` for
    /// every prime `p | m`.
    fn is_irreducible(&self) -> bool {
        let x = FieldElement::monomial(1);
        if self.square_n(&x, self.m) != x {
            return false;
        }

        let f = self.modulus();
        let mut n = self.m;
        let mut p = 2;
        while n > 1 {
            if p * p > n {
                p = n;
            }
            if n % p == 0 {
                let h = self.square_n(&x, self.m / p).add(&x);
                if !Self::gcd(f, h).is_one() {
                    return false;
                }
                while n % p == 0 {
                    n /= p;
                }
            }
            p += 1;
        }
        true
    }

    fn gcd(mut u: FieldElement<W>, mut v: FieldElement<W>) -> FieldElement<W> {
        while let Some(dv) = v.degree() {
            while let Some(du) = u.degree() {
                if du < dv {
                    break;
                }
                u.xor_shifted(&v, du - dv);
            }
            core::mem::swap(&mut u, &mut v);
        }
        u
    }

    /// Left-to-right comb multiplication into a double-width buffer
    fn mul_wide(x: &FieldElement<W>, y: &FieldElement<W>) -> WideElement<W> {
        let mut c = WideElement::zero();
        for k in (0..WORD_BITS).rev() {
            for j in 0..W {
                if (x.0[j] >> k) & 1 == 1 {
                    for (i, &yw) in y.0.iter().enumerate() {
                        c.xor_at(i + j, yw);
                    }
                }
            }
            if k != 0 {
                c.shl1();
            }
        }
        c
    }

    /// Squaring is linear over GF(2): interleave a zero after every bit
    fn square_wide(x: &FieldElement<W>) -> WideElement<W> {
        let mut c = WideElement::zero();
        for (i, &w) in x.0.iter().enumerate() {
            c.set(2 * i, spread(w & 0xFFFF));
            c.set(2 * i + 1, spread(w >> 16));
        }
        c
    }
}

/// Spread the low 16 bits of `x` into the even bit positions
#[inline(always)]
fn spread(x: u32) -> u32 {
    let mut x = x & 0xFFFF;
    x = (x | (x << 8)) & 0x00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333;
    x = (x | (x << 1)) & 0x5555_5555;
    x
}
