//! ECDH key agreement over binary curves
//!
//! [`EcdhSession`] drives one participant through a key agreement on any
//! loaded [`CurveContext`](gfecdh_algorithms::ec::gf2m::CurveContext).
//! [`EcdhB163`] wraps it behind the byte-oriented
//! [`KeyAgreement`](gfecdh_api::KeyAgreement) trait for NIST B-163.

pub mod b163;
mod session;

pub use b163::{B163PublicKey, B163SecretKey, B163Session, B163SharedSecret, EcdhB163};
pub use session::{EcdhSession, SessionState, SharedSecret};
