//! Common implementations and shared functionality for the gfecdh library
//!
//! This crate provides the secret containers used by every gfecdh component
//! to hold scalars, session keys and other sensitive values in fixed-size,
//! stack-allocated storage that is wiped when it goes out of scope.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, ZeroizeGuard};

// Re-export constant-time comparison
pub use security::memory::SecureCompare;
