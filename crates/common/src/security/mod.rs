//! Security primitives and memory safety utilities
//!
//! This module provides foundational security types and patterns used throughout
//! gfecdh to ensure proper handling of sensitive cryptographic material.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, ZeroizeGuard};

// Re-export constant-time comparison
pub use memory::SecureCompare;
