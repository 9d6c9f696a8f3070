//! Validation utilities for cipher inputs

use super::{Error, Result};
use params::salsa20::{SALSA20_KEY_SIZE_128, SALSA20_KEY_SIZE_256, SALSA20_NONCE_SIZE};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length { context, expected, actual });
    }
    Ok(())
}

/// Validate a Salsa20 key length (16 or 32 bytes)
#[inline(always)]
pub fn key_size(actual: usize) -> Result<()> {
    if actual != SALSA20_KEY_SIZE_128 && actual != SALSA20_KEY_SIZE_256 {
        return Err(Error::InvalidKeySize { actual });
    }
    Ok(())
}

/// Validate a Salsa20 nonce length (8 bytes)
#[inline(always)]
pub fn nonce_size(actual: usize) -> Result<()> {
    if actual != SALSA20_NONCE_SIZE {
        return Err(Error::InvalidNonceSize { actual });
    }
    Ok(())
}
