//! Constants for traditional (elliptic curve) key agreement

pub mod b163;
pub mod b233;
pub mod ecdh;
