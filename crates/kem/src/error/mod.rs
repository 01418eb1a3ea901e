//! Error handling for key agreement sessions

use core::fmt;

use crate::ecdh::SessionState;
use gfecdh_algorithms::error::Error as PrimitiveError;
use gfecdh_api::error::Error as CoreError;

/// Error type for key agreement sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// A session operation was called out of order
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },

    /// The randomness oracle never produced a usable scalar
    RandomGeneration { context: &'static str },

    /// Invalid key format
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },
}

/// Result type for key agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// True when the peer's public value caused the failure
    pub fn is_peer_error(&self) -> bool {
        matches!(
            self,
            Error::Primitive(
                PrimitiveError::DecompressionFailure { .. }
                    | PrimitiveError::InvalidPoint { .. }
                    | PrimitiveError::Parameter { .. }
                    | PrimitiveError::Length { .. }
            )
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidState { operation, state } => {
                write!(f, "Cannot {} while the session is {}", operation, state.as_str())
            }
            Error::RandomGeneration { context } => {
                write!(f, "Random generation failed for {}", context)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {}: {}", key_type, reason)
            }
        }
    }
}

// Standard error trait
#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

// From PrimitiveError to Error
impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidState { operation, state } => CoreError::InvalidState {
                context: operation,
                reason: state.as_str(),
            },
            Error::RandomGeneration { context } => CoreError::RandomGeneration { context },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidParameter {
                context: key_type,
                reason,
            },
        }
    }
}

// Include validation submodule
pub mod validate;
