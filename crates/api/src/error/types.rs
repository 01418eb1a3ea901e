//! Error type definitions for key agreement operations

/// Primary error type for gfecdh operations
///
/// Every payload is static or numeric so that constructing an error never
/// allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Curve parameters are unusable (zero B, reducible or malformed polynomial)
    #[cfg_attr(feature = "std", error("{context}: invalid curve parameters: {reason}"))]
    InvalidCurveParameters {
        context: &'static str,
        reason: &'static str,
    },

    /// A precomputed table does not match its declared shape or curve
    #[cfg_attr(feature = "std", error("{context}: invalid precomputed table: {reason}"))]
    InvalidTable {
        context: &'static str,
        reason: &'static str,
    },

    /// An x-coordinate has no matching point on the curve
    #[cfg_attr(feature = "std", error("{context}: point decompression failed: {reason}"))]
    DecompressionFailure {
        context: &'static str,
        reason: &'static str,
    },

    /// A point failed validation before use
    #[cfg_attr(feature = "std", error("{context}: invalid point: {reason}"))]
    InvalidPoint {
        context: &'static str,
        reason: &'static str,
    },

    /// A scalar is wider than the multiplier supports
    #[cfg_attr(
        feature = "std",
        error("{context}: scalar of {bits} bits exceeds the supported {max_bits} bits")
    )]
    ScalarOutOfRange {
        context: &'static str,
        bits: usize,
        max_bits: usize,
    },

    /// Field inversion of zero; indicates an internal invariant violation
    #[cfg_attr(feature = "std", error("{context}: division by zero"))]
    DivisionByZero { context: &'static str },

    /// Invalid length error with context
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid length (expected {expected}, got {actual})")
    )]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[cfg_attr(feature = "std", error("{context}: invalid parameter: {reason}"))]
    InvalidParameter {
        context: &'static str,
        reason: &'static str,
    },

    /// A session operation was called in the wrong state
    #[cfg_attr(feature = "std", error("{context}: invalid session state: {reason}"))]
    InvalidState {
        context: &'static str,
        reason: &'static str,
    },

    /// The randomness oracle failed
    #[cfg_attr(feature = "std", error("{context}: random generation failed"))]
    RandomGeneration { context: &'static str },
}

/// Result type for gfecdh operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidCurveParameters { reason, .. } => {
                Self::InvalidCurveParameters { context, reason }
            }
            Self::InvalidTable { reason, .. } => Self::InvalidTable { context, reason },
            Self::DecompressionFailure { reason, .. } => {
                Self::DecompressionFailure { context, reason }
            }
            Self::InvalidPoint { reason, .. } => Self::InvalidPoint { context, reason },
            Self::ScalarOutOfRange { bits, max_bits, .. } => Self::ScalarOutOfRange {
                context,
                bits,
                max_bits,
            },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            Self::InvalidState { reason, .. } => Self::InvalidState { context, reason },
            Self::RandomGeneration { .. } => Self::RandomGeneration { context },
        }
    }

    /// True for errors caused by a malformed or hostile peer value
    pub fn is_peer_error(&self) -> bool {
        matches!(
            self,
            Self::DecompressionFailure { .. }
                | Self::InvalidPoint { .. }
                | Self::InvalidLength { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCurveParameters { context, reason } => {
                write!(f, "{}: invalid curve parameters: {}", context, reason)
            }
            Self::InvalidTable { context, reason } => {
                write!(f, "{}: invalid precomputed table: {}", context, reason)
            }
            Self::DecompressionFailure { context, reason } => {
                write!(f, "{}: point decompression failed: {}", context, reason)
            }
            Self::InvalidPoint { context, reason } => {
                write!(f, "{}: invalid point: {}", context, reason)
            }
            Self::ScalarOutOfRange {
                context,
                bits,
                max_bits,
            } => write!(
                f,
                "{}: scalar of {} bits exceeds the supported {} bits",
                context, bits, max_bits
            ),
            Self::DivisionByZero { context } => write!(f, "{}: division by zero", context),
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            Self::InvalidParameter { context, reason } => {
                write!(f, "{}: invalid parameter: {}", context, reason)
            }
            Self::InvalidState { context, reason } => {
                write!(f, "{}: invalid session state: {}", context, reason)
            }
            Self::RandomGeneration { context } => {
                write!(f, "{}: random generation failed", context)
            }
        }
    }
}
