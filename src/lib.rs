//! # gfecdh
//!
//! Elliptic curve Diffie-Hellman over binary fields GF(2^m), sized for
//! constrained targets: every buffer is fixed-size, public values travel as
//! compressed points, and fixed-base multiplication runs off a precomputed
//! comb ("brick") table.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! gfecdh = "0.3"
//! ```
//!
//! ```ignore
//! use gfecdh::prelude::*;
//!
//! let ecdh = EcdhB163::new()?;
//! let (pk_a, sk_a) = ecdh.keypair(&mut rng)?;
//! let (pk_b, sk_b) = ecdh.keypair(&mut rng)?;
//! assert_eq!(ecdh.agree(&sk_a, &pk_b)?, ecdh.agree(&sk_b, &pk_a)?);
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gfecdh-params`]: curve constants and ROM tables
//! - [`gfecdh-algorithms`]: field engine, curve model, point codec and multipliers
//! - [`gfecdh-kem`]: key-agreement sessions
//! - [`gfecdh-api`]: the shared error type and the `KeyAgreement` trait

#![cfg_attr(not(feature = "std"), no_std)]

pub use gfecdh_algorithms as algorithms;
pub use gfecdh_api as api;
pub use gfecdh_common as common;
pub use gfecdh_kem as kem;
pub use gfecdh_params as params;

/// Common imports for gfecdh users
pub mod prelude {
    pub use crate::api::{Error, KeyAgreement, Result};

    pub use crate::algorithms::ec::gf2m::{
        AffinePoint, BinaryField, Brick, CompressedPoint, Curve, CurveContext, FieldElement,
        Scalar,
    };

    pub use crate::kem::{
        B163PublicKey, B163SecretKey, B163SharedSecret, EcdhB163, EcdhSession, SessionState,
        SharedSecret,
    };

    pub use crate::common::{SecretBuffer, SecureCompare, ZeroizeGuard};
}
