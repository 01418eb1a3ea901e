//! Trait definition for two-party key agreement
//!
//! A key agreement exchanges one public value in each direction and lets both
//! parties compute the same raw shared secret. Deriving symmetric keys from
//! that secret is left to the caller.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Two-party key agreement over a fixed, pre-shared domain.
///
/// Implementors hold their immutable domain (curve parameters and any
/// precomputed tables) and may be shared by reference across threads; all
/// per-session state lives in the returned key values.
pub trait KeyAgreement {
    /// Public value sent to the peer.
    type PublicKey: Clone + AsRef<[u8]>;

    /// Private value; zeroized when no longer needed.
    type SecretKey: Zeroize + AsRef<[u8]>;

    /// Raw shared secret handed to an external key-derivation step.
    type SharedSecret: Zeroize + AsRef<[u8]>;

    /// Returns the algorithm name.
    fn name(&self) -> &'static str;

    /// Generate a fresh keypair from the supplied randomness oracle.
    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Recompute the public value belonging to `secret_key`.
    fn public_key(&self, secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;

    /// Combine our secret with the peer's public value.
    ///
    /// Malformed or hostile peer values must be rejected, never reinterpreted.
    fn agree(
        &self,
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
