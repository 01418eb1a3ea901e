//! Public API traits and types for the gfecdh library
//!
//! This crate provides the public API surface shared by every gfecdh
//! component: the error type returned across crate boundaries and the
//! key-agreement trait implemented by concrete curves.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::KeyAgreement;
