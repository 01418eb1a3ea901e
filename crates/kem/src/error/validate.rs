//! Validation utilities for key agreement sessions

use super::{Error, Result};
use crate::ecdh::SessionState;

/// Validate that a session is in the state an operation requires
pub fn state(
    current: SessionState,
    required: SessionState,
    operation: &'static str,
) -> Result<()> {
    if current != required {
        return Err(Error::InvalidState {
            operation,
            state: current,
        });
    }
    Ok(())
}

/// Validate key format
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}
