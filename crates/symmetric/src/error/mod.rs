//! Error handling for streaming Salsa20 operations
//!
//! Cipher construction failures and sink failures are folded into one
//! [`Error`] type. Errors raised by a byte source are not wrapped here: a
//! [`Salsa20Reader`](crate::Salsa20Reader) reports them with the source's own
//! error type.

use core::convert::Infallible;
use std::io;

use thiserror::Error;

/// Errors produced by the streaming adapters and one-shot helpers
#[derive(Debug, Error)]
pub enum Error {
    /// Key or nonce rejected when the cipher was constructed
    #[error("cipher error: {0}")]
    Cipher(#[from] algorithms::Error),

    /// The underlying reader or writer failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Write or close attempted after the stream was closed
    #[error("stream already finished")]
    StreamFinished,

    /// A transform produced a different number of bytes than it was given
    #[error("length mismatch for {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Operation that detected the mismatch
        context: &'static str,
        /// Bytes supplied
        expected: usize,
        /// Bytes produced
        actual: usize,
    },
}

/// Result type for streaming operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(inner) => inner,
            Error::StreamFinished => io::Error::new(io::ErrorKind::BrokenPipe, err),
            Error::Cipher(_) => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::LengthMismatch { .. } => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}

impl From<Error> for salsastream_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Cipher(inner) => inner.into(),
            Error::Io(inner) => inner.into(),
            Error::StreamFinished => salsastream_api::Error::StreamFinished {
                context: "Salsa20 stream",
            },
            Error::LengthMismatch { context, expected, actual } => {
                salsastream_api::Error::InvalidLength { context, expected, actual }
            }
        }
    }
}

/// Fail with [`Error::StreamFinished`] once a stream has been closed
#[inline(always)]
pub fn validate_stream_open(closed: bool) -> Result<()> {
    if closed {
        return Err(Error::StreamFinished);
    }
    Ok(())
}
