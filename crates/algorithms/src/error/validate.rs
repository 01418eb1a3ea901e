//! Validation utilities for curve primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate curve or field parameters
#[inline(always)]
pub fn curve(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidCurveParameters { reason });
    }
    Ok(())
}

/// Validate a precomputed table
#[inline(always)]
pub fn table(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidTable { reason });
    }
    Ok(())
}

/// Validate a point before it is used
#[inline(always)]
pub fn point(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPoint { context });
    }
    Ok(())
}
