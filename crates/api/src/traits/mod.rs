//! Public traits implemented by gfecdh algorithms

pub mod key_agreement;

pub use key_agreement::KeyAgreement;
