//! Error handling for the Salsa20 cipher core

use core::fmt;

use salsastream_api::{Error as CoreError, Result as CoreResult};

/// The error type for cipher construction and keystream operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key was neither 16 nor 32 bytes long
    InvalidKeySize {
        /// Length of the rejected key in bytes
        actual: usize,
    },

    /// Nonce was not 8 bytes long
    InvalidNonceSize {
        /// Length of the rejected nonce in bytes
        actual: usize,
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

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeySize { actual } => {
                write!(f, "Invalid key size: expected 16 or 32 bytes, got {}", actual)
            }
            Error::InvalidNonceSize { actual } => {
                write!(f, "Invalid nonce size: expected 8 bytes, got {}", actual)
            }
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}", context, expected, actual)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKeySize { actual } => CoreError::InvalidKey {
                context: "Salsa20 key",
                #[cfg(feature = "std")]
                message: format!("key must be 16 or 32 bytes, got {}", actual),
            },
            Error::InvalidNonceSize { actual } => CoreError::InvalidNonce {
                context: "Salsa20 nonce",
                #[cfg(feature = "std")]
                message: format!("nonce must be 8 bytes, got {}", actual),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }
}

/// Convert a cipher result to an API result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;
