//! Constant values for gfecdh cryptographic operations
//!
//! Curve parameters are shipped the way a constrained target stores them in
//! ROM: fixed-size arrays of little-endian 32-bit words. Nothing here is
//! trusted as-is; `gfecdh-algorithms` validates every table against its
//! declared curve when it is loaded.

#![no_std]
#![forbid(unsafe_code)]

pub mod traditional;

pub use traditional::{b163, b233, ecdh};
