//! Elliptic curve primitives over binary fields
//!
//! [`gf2m`] is generic over the word count of a field element and the size
//! of the brick table. [`b163`] and [`b233`] bind it to the NIST binary
//! curves shipped in `gfecdh-params`.

pub mod b163;
pub mod b233;
pub mod gf2m;

pub use b163::{B163Context, B163Point, B163Scalar};
pub use b233::{B233Context, B233Point, B233Scalar};
