//! Binary field and binary elliptic curve primitives
//!
//! This crate provides the arithmetic engine behind gfecdh: GF(2^m) field
//! arithmetic with a sparse reduction polynomial, curve arithmetic in affine
//! and López–Dahab coordinates, point compression, and two scalar
//! multipliers (a fixed-base comb over a precomputed table and a general
//! double-and-add for runtime points).
//!
//! Every value is a fixed-size array sized by const generics, so nothing on
//! the key-agreement path touches the heap. The crate works in both `std`
//! and `no_std` environments.
//!
//! The arithmetic is not constant-time; it targets protocol correctness and
//! input validation on constrained devices.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve primitives over binary fields
pub mod ec;
pub use ec::gf2m::{
    AffinePoint, BinaryField, Brick, CompressedPoint, Curve, CurveContext, CurveParameters,
    CurveRom, FieldElement, Scalar, WideElement,
};
pub use ec::{b163, b233};

// Re-export security types from gfecdh-common
pub use gfecdh_common::security::{SecretBuffer, SecureCompare, ZeroizeGuard};
