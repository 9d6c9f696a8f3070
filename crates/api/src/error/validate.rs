//! Validation utilities shared by every crate in the workspace

use super::types::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength { context, expected, actual });
    }
    Ok(())
}
