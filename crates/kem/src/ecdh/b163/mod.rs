//! ECDH with NIST B-163
//!
//! Public keys are compressed points (`tag || x`, 22 bytes), secret keys are
//! 21-byte big-endian scalars of at most 163 bits, and the shared secret is
//! the 21-byte big-endian x-coordinate of the shared point. Feeding the
//! shared secret through a key-derivation function is left to the caller.

use gfecdh_algorithms::ec::b163::{self as ec_b163, B163Context, B163Scalar};
use gfecdh_api::{error::Error as ApiError, KeyAgreement, Result as ApiResult, ResultExt};
use gfecdh_common::security::SecretBuffer;
use gfecdh_params::ecdh::{
    ECDH_B163_PRIVATE_KEY_SIZE, ECDH_B163_PUBLIC_KEY_SIZE, ECDH_B163_SHARED_SECRET_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::session::EcdhSession;
use crate::error::{validate, Error, Result};

/// Session on the B-163 context
pub type B163Session<'ctx> =
    EcdhSession<'ctx, { ec_b163::B163_WORDS }, { ec_b163::B163_BRICK_ENTRIES }>;

/// ECDH over B-163; owns the shared, read-only curve context
#[derive(Clone, Debug)]
pub struct EcdhB163 {
    context: B163Context,
}

/// Public key for ECDH-B163 (compressed point)
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct B163PublicKey([u8; ECDH_B163_PUBLIC_KEY_SIZE]);

/// Secret key for ECDH-B163 (big-endian scalar)
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct B163SecretKey(SecretBuffer<ECDH_B163_PRIVATE_KEY_SIZE>);

/// Shared secret from ECDH-B163 (big-endian x-coordinate)
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct B163SharedSecret(SecretBuffer<ECDH_B163_SHARED_SECRET_SIZE>);

impl B163PublicKey {
    /// Wrap an encoded public value; only the length is checked here
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::key(
            bytes.len() == ECDH_B163_PUBLIC_KEY_SIZE,
            "B-163 public key",
            "expected 22 bytes",
        )?;
        let mut out = [0u8; ECDH_B163_PUBLIC_KEY_SIZE];
        out.copy_from_slice(bytes);
        Ok(B163PublicKey(out))
    }
}

impl B163SecretKey {
    /// Wrap a big-endian scalar; range is checked when the key is used
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        SecretBuffer::from_slice(bytes)
            .map(B163SecretKey)
            .ok_or(Error::InvalidKey {
                key_type: "B-163 secret key",
                reason: "expected 21 bytes",
            })
    }

    fn scalar(&self) -> Result<B163Scalar> {
        Ok(B163Scalar::from_be_bytes(self.0.as_ref())?)
    }
}

impl AsRef<[u8]> for B163PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl AsRef<[u8]> for B163SecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
impl AsRef<[u8]> for B163SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl EcdhB163 {
    /// Load and validate the B-163 context
    pub fn new() -> Result<Self> {
        Ok(EcdhB163 {
            context: ec_b163::context()?,
        })
    }

    /// The loaded curve context
    pub fn context(&self) -> &B163Context {
        &self.context
    }

    /// Start a fresh session on this context
    pub fn session(&self) -> B163Session<'_> {
        EcdhSession::new(&self.context)
    }

    /// Session for a stored secret key, ready to take the peer's value
    pub fn resume(&self, secret_key: &B163SecretKey) -> Result<B163Session<'_>> {
        EcdhSession::resume(&self.context, secret_key.scalar()?)
    }

    fn derive(&self, secret_key: &B163SecretKey) -> Result<B163Session<'_>> {
        let mut session = EcdhSession::with_scalar(&self.context, secret_key.scalar()?)?;
        session.derive_public()?;
        Ok(session)
    }

    fn encode_public(session: &B163Session<'_>) -> Result<B163PublicKey> {
        let mut out = [0u8; ECDH_B163_PUBLIC_KEY_SIZE];
        session.public_bytes(&mut out)?;
        Ok(B163PublicKey(out))
    }

    fn export_secret(session: &B163Session<'_>) -> Result<B163SecretKey> {
        let scalar = session.scalar().ok_or(Error::InvalidState {
            operation: "export secret key",
            state: session.state(),
        })?;
        let mut sk = SecretBuffer::<ECDH_B163_PRIVATE_KEY_SIZE>::zeroed();
        scalar.to_be_bytes(sk.as_mut())?;
        Ok(B163SecretKey(sk))
    }
}

impl KeyAgreement for EcdhB163 {
    type PublicKey = B163PublicKey;
    type SecretKey = B163SecretKey;
    type SharedSecret = B163SharedSecret;

    fn name(&self) -> &'static str {
        "ECDH-B163"
    }

    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let mut session = self.session();
        session.generate(rng).with_context("ECDH-B163 keypair")?;
        session.derive_public().with_context("ECDH-B163 keypair")?;

        let sk = Self::export_secret(&session).with_context("ECDH-B163 keypair")?;
        let pk = Self::encode_public(&session).with_context("ECDH-B163 keypair")?;
        Ok((pk, sk))
    }

    fn public_key(&self, secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        let session = self.derive(secret_key).with_context("ECDH-B163 public key")?;
        Self::encode_public(&session).with_context("ECDH-B163 public key")
    }

    fn agree(
        &self,
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        let mut session = self.resume(secret_key).map_err(ApiError::from)?;
        let shared = session
            .complete_encoded(peer_public_key.as_ref())
            .map_err(ApiError::from)?;

        let mut out = SecretBuffer::<ECDH_B163_SHARED_SECRET_SIZE>::zeroed();
        shared
            .to_be_bytes(self.context.field(), out.as_mut())
            .map_err(ApiError::from)?;
        Ok(B163SharedSecret(out))
    }
}
