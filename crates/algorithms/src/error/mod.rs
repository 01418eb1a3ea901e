//! Error handling for binary curve primitives

use core::fmt;

use gfecdh_api::Error as CoreError;

/// The error type for field and curve primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Curve or field parameters are unusable
    InvalidCurveParameters {
        /// Why the parameters were rejected
        reason: &'static str,
    },

    /// A precomputed brick table does not match its curve or layout
    InvalidTable {
        /// Why the table was rejected
        reason: &'static str,
    },

    /// No point on the curve has the requested x-coordinate
    DecompressionFailure {
        /// Why decompression failed
        reason: &'static str,
    },

    /// A point failed validation before use
    InvalidPoint {
        /// Operation that rejected the point
        context: &'static str,
    },

    /// A scalar is wider than the multiplier supports
    ScalarOutOfRange {
        /// Bit length of the offending scalar
        bits: usize,
        /// Largest supported bit length
        max_bits: usize,
    },

    /// Inversion of the zero element
    DivisionByZero {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCurveParameters { reason } => {
                write!(f, "Invalid curve parameters: {}", reason)
            }
            Error::InvalidTable { reason } => write!(f, "Invalid brick table: {}", reason),
            Error::DecompressionFailure { reason } => {
                write!(f, "Point decompression failed: {}", reason)
            }
            Error::InvalidPoint { context } => write!(f, "Invalid point for {}", context),
            Error::ScalarOutOfRange { bits, max_bits } => write!(
                f,
                "Scalar of {} bits exceeds the supported {} bits",
                bits, max_bits
            ),
            Error::DivisionByZero { context } => write!(f, "Division by zero in {}", context),
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidCurveParameters { reason } => CoreError::InvalidCurveParameters {
                context: "curve parameters",
                reason,
            },
            Error::InvalidTable { reason } => CoreError::InvalidTable {
                context: "brick table",
                reason,
            },
            Error::DecompressionFailure { reason } => CoreError::DecompressionFailure {
                context: "point decompression",
                reason,
            },
            Error::InvalidPoint { context } => CoreError::InvalidPoint {
                context,
                reason: "point failed validation",
            },
            Error::ScalarOutOfRange { bits, max_bits } => CoreError::ScalarOutOfRange {
                context: "scalar multiplication",
                bits,
                max_bits,
            },
            Error::DivisionByZero { context } => CoreError::DivisionByZero { context },
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                reason,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
