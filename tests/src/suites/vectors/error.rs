//! Structured error types for the vector engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vector file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("crypto operation failed: {0}")]
    Crypto(String),

    #[error("unsupported algorithm: {0}")]
    Unsupported(String),

    #[error("case {id}: missing required field: {field}")]
    MissingField { id: u64, field: &'static str },

    #[error("case {id}: {what} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        id: u64,
        what: &'static str,
        expected: String,
        actual: String,
    },

    #[error("case {id}: expected failure containing {expected:?}, got {actual}")]
    UnexpectedOutcome {
        id: u64,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<gfecdh_api::Error> for EngineError {
    fn from(e: gfecdh_api::Error) -> Self {
        EngineError::Crypto(e.to_string())
    }
}

impl From<gfecdh_kem::Error> for EngineError {
    fn from(e: gfecdh_kem::Error) -> Self {
        EngineError::Crypto(e.to_string())
    }
}
