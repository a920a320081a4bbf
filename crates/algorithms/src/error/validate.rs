//! Validation utilities for curve parameters and field constructors

use super::{Error, Result};
use std::borrow::Cow;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter<N: Into<Cow<'static, str>>>(
    condition: bool,
    name: N,
    reason: &'static str,
) -> Result<()> {
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
