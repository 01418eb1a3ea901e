//! Constant-time comparison of fixed-size byte arrays

use subtle::ConstantTimeEq;

/// Trait for types that can be compared without data-dependent branches
pub trait SecureCompare: Sized {
    /// Compare two values in constant time
    fn secure_eq(&self, other: &Self) -> bool;
}

impl<const N: usize> SecureCompare for [u8; N] {
    fn secure_eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
