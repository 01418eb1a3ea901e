//! Per-participant ECDH session
//!
//! ```text
//! Init --generate--> Generated --derive_public--> PublicDerived --complete--> Terminal
//!   \____________________\______________________________\______ error ______> Aborted
//! ```
//!
//! [`EcdhSession::with_scalar`] enters at `Generated` and
//! [`EcdhSession::resume`] enters at `PublicDerived`.
//!
//! A session borrows an immutable [`CurveContext`] and owns only its scalar
//! and public value. The scalar is wiped when the session completes, when
//! any operation fails, and when the session is dropped.

use core::fmt;

use gfecdh_algorithms::ec::gf2m::{
    AffinePoint, BinaryField, CompressedPoint, CurveContext, FieldElement, Scalar,
};
use gfecdh_algorithms::error::Error as PrimitiveError;
use gfecdh_common::security::ZeroizeGuard;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::{debug, instrument, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};

/// Zero scalars are redrawn; an oracle that keeps producing zero is broken
const MAX_SCALAR_DRAWS: usize = 8;

/// Where a session is in the key agreement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Bound to a context, no scalar yet
    Init,
    /// Holds a private scalar
    Generated,
    /// Own public value computed and ready to send
    PublicDerived,
    /// Shared secret produced; the scalar is gone
    Terminal,
    /// An operation failed; the scalar is gone
    Aborted,
}

impl SessionState {
    /// Lower-case name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Init => "init",
            SessionState::Generated => "generated",
            SessionState::PublicDerived => "public-derived",
            SessionState::Terminal => "terminal",
            SessionState::Aborted => "aborted",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The x-coordinate of the shared point
///
/// Hand it to a key-derivation function; it is not itself a uniform key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret<const W: usize>(FieldElement<W>);

impl<const W: usize> SharedSecret<W> {
    /// The raw x-coordinate
    pub fn x(&self) -> &FieldElement<W> {
        &self.0
    }

    /// Write the x-coordinate as `⌈m/8⌉` big-endian bytes
    pub fn to_be_bytes(&self, field: &BinaryField<W>, out: &mut [u8]) -> Result<()> {
        field.to_be_bytes(&self.0, out)?;
        Ok(())
    }
}

impl<const W: usize> PartialEq for SharedSecret<W> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.0.ct_eq(&other.0))
    }
}

impl<const W: usize> Eq for SharedSecret<W> {}

impl<const W: usize> fmt::Debug for SharedSecret<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret<{}>([REDACTED])", W)
    }
}

/// One participant's side of an ECDH key agreement
pub struct EcdhSession<'ctx, const W: usize, const N: usize> {
    context: &'ctx CurveContext<W, N>,
    scalar: Option<Scalar<W>>,
    public: Option<CompressedPoint<W>>,
    state: SessionState,
}

impl<'ctx, const W: usize, const N: usize> EcdhSession<'ctx, W, N> {
    /// Start a session on a shared context
    pub fn new(context: &'ctx CurveContext<W, N>) -> Self {
        EcdhSession {
            context,
            scalar: None,
            public: None,
            state: SessionState::Init,
        }
    }

    /// Start a session with a caller-chosen scalar, skipping `generate`.
    ///
    /// The scalar must be non-zero and at most `m` bits wide.
    pub fn with_scalar(context: &'ctx CurveContext<W, N>, scalar: Scalar<W>) -> Result<Self> {
        Self::check_scalar(context, &scalar)?;
        Ok(EcdhSession {
            context,
            scalar: Some(scalar),
            public: None,
            state: SessionState::Generated,
        })
    }

    /// Start the online phase for a scalar whose public value was published
    /// earlier.
    ///
    /// The session enters `PublicDerived` without running the fixed-base
    /// multiply, so [`public_value`](Self::public_value) stays `None`.
    pub fn resume(context: &'ctx CurveContext<W, N>, scalar: Scalar<W>) -> Result<Self> {
        Self::check_scalar(context, &scalar)?;
        Ok(EcdhSession {
            context,
            scalar: Some(scalar),
            public: None,
            state: SessionState::PublicDerived,
        })
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The context this session runs on
    pub fn context(&self) -> &'ctx CurveContext<W, N> {
        self.context
    }

    /// Own compressed public value, once derived
    pub fn public_value(&self) -> Option<&CompressedPoint<W>> {
        self.public.as_ref()
    }

    pub(crate) fn scalar(&self) -> Option<&Scalar<W>> {
        self.scalar.as_ref()
    }

    /// Draw a uniformly random non-zero scalar of `m` bits
    #[instrument(skip_all)]
    pub fn generate<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<()> {
        self.expect_state(SessionState::Init, "generate")?;
        let bits = self.context.field().degree();

        for _ in 0..MAX_SCALAR_DRAWS {
            let scalar = match Scalar::random_bits(rng, bits) {
                Ok(s) => s,
                Err(e) => return self.fail(e.into()),
            };
            if !scalar.is_zero() {
                self.scalar = Some(scalar);
                self.state = SessionState::Generated;
                debug!(bits, "session scalar generated");
                return Ok(());
            }
        }
        self.fail(Error::RandomGeneration {
            context: "session scalar",
        })
    }

    /// Compute `P = s·G` with the brick table and compress it.
    ///
    /// Needs no peer input, so it can run before the peer is known.
    #[instrument(skip_all)]
    pub fn derive_public(&mut self) -> Result<CompressedPoint<W>> {
        self.expect_state(SessionState::Generated, "derive public value")?;
        let result = self.compute_public();
        let public = self.guard(result)?;

        self.public = Some(public);
        self.state = SessionState::PublicDerived;
        debug!("public value derived");
        Ok(public)
    }

    /// Encode the derived public value as `tag || x`
    pub fn public_bytes(&self, out: &mut [u8]) -> Result<()> {
        let public = self.public.as_ref().ok_or(Error::InvalidState {
            operation: "encode public value",
            state: self.state,
        })?;
        public.encode(self.context.field(), out)?;
        Ok(())
    }

    /// Decompress and validate the peer's value and compute the shared secret.
    ///
    /// Rejects a peer value that does not decompress, the point at infinity,
    /// a point off the curve, and a shared point at infinity. On success the
    /// session is `Terminal`; on any failure it is `Aborted`. Either way the
    /// scalar has been wiped.
    #[instrument(skip_all)]
    pub fn complete(&mut self, peer: &CompressedPoint<W>) -> Result<SharedSecret<W>> {
        self.expect_state(SessionState::PublicDerived, "complete")?;
        let result = self.compute_shared(peer);
        let secret = self.guard(result)?;

        self.wipe();
        self.state = SessionState::Terminal;
        debug!("key agreement complete");
        Ok(secret)
    }

    /// [`complete`](Self::complete) for a peer value still in wire encoding
    pub fn complete_encoded(&mut self, peer: &[u8]) -> Result<SharedSecret<W>> {
        self.expect_state(SessionState::PublicDerived, "complete")?;
        let decoded = CompressedPoint::decode(self.context.field(), peer).map_err(Error::from);
        let peer = self.guard(decoded)?;
        self.complete(&peer)
    }

    /// Discard the scalar and abort, unless the session already finished
    pub fn abort(&mut self) {
        self.wipe();
        if self.state != SessionState::Terminal {
            self.state = SessionState::Aborted;
        }
    }

    fn check_scalar(context: &CurveContext<W, N>, scalar: &Scalar<W>) -> Result<()> {
        validate::key(!scalar.is_zero(), "session scalar", "scalar must be non-zero")?;
        let bits = scalar.bit_length();
        let max_bits = context.field().degree();
        if bits > max_bits {
            return Err(PrimitiveError::ScalarOutOfRange { bits, max_bits }.into());
        }
        Ok(())
    }

    fn compute_public(&self) -> Result<CompressedPoint<W>> {
        let scalar = self.scalar.as_ref().ok_or(Error::InvalidState {
            operation: "derive public value",
            state: self.state,
        })?;
        let mut point = self.context.brick().multiply(scalar)?;
        let point = ZeroizeGuard::new(&mut point);
        Ok(self.context.curve().compress(&point)?)
    }

    fn compute_shared(&self, peer: &CompressedPoint<W>) -> Result<SharedSecret<W>> {
        let curve = self.context.curve();
        let scalar = self.scalar.as_ref().ok_or(Error::InvalidState {
            operation: "complete",
            state: self.state,
        })?;

        let q = curve.decompress(peer)?;
        if q.is_identity() {
            return Err(PrimitiveError::InvalidPoint {
                context: "peer public value",
            }
            .into());
        }

        let mut shared: AffinePoint<W> = curve.multiply(scalar, &q)?;
        let shared = ZeroizeGuard::new(&mut shared);
        if shared.is_identity() {
            return Err(PrimitiveError::InvalidPoint {
                context: "shared point",
            }
            .into());
        }
        Ok(SharedSecret(*shared.x()))
    }

    fn expect_state(&mut self, required: SessionState, operation: &'static str) -> Result<()> {
        let result = validate::state(self.state, required, operation);
        self.guard(result)
    }

    fn guard<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            if e.is_peer_error() {
                warn!(error = %e, "peer public value rejected");
            } else {
                debug!(error = %e, "session aborted");
            }
            self.abort();
        }
        result
    }

    fn fail<T>(&mut self, err: Error) -> Result<T> {
        self.guard(Err(err))
    }

    fn wipe(&mut self) {
        if let Some(mut scalar) = self.scalar.take() {
            scalar.zeroize();
        }
    }
}

impl<const W: usize, const N: usize> Drop for EcdhSession<'_, W, N> {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl<const W: usize, const N: usize> fmt::Debug for EcdhSession<'_, W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdhSession")
            .field("state", &self.state)
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

