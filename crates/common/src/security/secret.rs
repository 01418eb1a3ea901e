//! Secret data types with guaranteed zeroization
//!
//! Key-agreement code runs without a heap, so every container here is a
//! fixed-size value type. Secrets are wiped when dropped; intermediate values
//! that live in caller-owned storage can be wiped with a [`ZeroizeGuard`].

use core::convert::{AsMut, AsRef};
use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::security::memory::SecureCompare;

/// Fixed-size secret buffer that guarantees zeroization
///
/// This type provides:
/// - Automatic zeroization on drop
/// - Compile-time size guarantees
/// - A `Debug` implementation that never prints the contents
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Copy a slice of exactly `N` bytes into a new buffer
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != N {
            return None;
        }
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Some(Self { data })
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for SecretBuffer<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data.secure_eq(&other.data)
    }
}

impl<const N: usize> Eq for SecretBuffer<N> {}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

/// Guard type that ensures a value is zeroized when dropped
///
/// This is useful for ensuring cleanup happens even in the presence
/// of early returns through `?`.
pub struct ZeroizeGuard<'a, T: Zeroize> {
    value: &'a mut T,
}

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Create a new zeroize guard for the given value
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_buffer_basic() {
        let mut buffer = SecretBuffer::<21>::new([42u8; 21]);
        assert_eq!(buffer.len(), 21);
        assert_eq!(buffer.as_slice()[0], 42);

        buffer.as_mut_slice()[0] = 1;
        assert_eq!(buffer.as_slice()[0], 1);
    }

    #[test]
    fn test_secret_buffer_from_slice() {
        assert!(SecretBuffer::<4>::from_slice(&[1, 2, 3]).is_none());
        let buffer = SecretBuffer::<4>::from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(buffer.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_secret_buffer_equality_and_debug() {
        let a = SecretBuffer::<8>::new([0xAA; 8]);
        let b = a.clone();
        let c = SecretBuffer::<8>::zeroed();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let shown = format!("{:?}", a);
        assert_eq!(shown, "SecretBuffer<8>([REDACTED])");
    }

    #[test]
    fn test_secret_buffer_zeroize() {
        let mut buffer = SecretBuffer::<16>::new([0x5A; 16]);
        buffer.zeroize();
        assert_eq!(buffer.as_slice(), &[0u8; 16]);
    }

    #[test]
    fn test_zeroize_guard() {
        let mut value = [1u8, 2, 3, 4];
        {
            let mut guard = ZeroizeGuard::new(&mut value);
            guard[0] = 9;
            assert_eq!(guard[0], 9);
        }
        assert_eq!(value, [0u8; 4]);
    }
}
