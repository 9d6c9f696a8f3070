//! Error type definitions for cipher and stream operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for salsastream operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material was rejected
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Nonce material was rejected
    InvalidNonce {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Operation attempted on a stream that has already been closed
    StreamFinished {
        context: &'static str,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for salsastream operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidNonce {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidNonce {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::StreamFinished { .. } => Self::StreamFinished { context },
            Self::Other {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message,
            },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidKey { context } => {
                write!(f, "Invalid key: {}", context)
            }
            #[cfg(feature = "std")]
            Self::InvalidNonce { context, message } => {
                write!(f, "Invalid nonce: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidNonce { context } => {
                write!(f, "Invalid nonce: {}", context)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            Self::StreamFinished { context } => {
                write!(f, "{}: stream already finished", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}
