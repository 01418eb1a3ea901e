//! ECDH key agreement over binary curves
//!
//! This crate sequences the primitives of `gfecdh-algorithms` into a
//! key-agreement session: draw a scalar, derive and compress the public
//! value with the brick table, then decompress the peer's value and compute
//! the shared x-coordinate with the general multiplier.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod ecdh;
pub mod error;

// Re-exports
pub use ecdh::{
    B163PublicKey, B163SecretKey, B163Session, B163SharedSecret, EcdhB163, EcdhSession, SessionState,
    SharedSecret,
};
pub use error::{Error, Result};
