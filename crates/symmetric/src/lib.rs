//! Streaming Salsa20 for the salsastream library
//!
//! This crate puts the Salsa20 keystream from `salsastream-algorithms`
//! between byte sources and sinks:
//!
//! - [`Salsa20Reader`] decrypts (or encrypts) a pull-based [`ByteSource`] a
//!   block at a time and is itself a `ByteSource`, so readers chain
//! - [`Salsa20Writer`] does the same for a push-based [`ByteSink`]
//! - [`SliceSource`], [`IoSource`], [`VecSink`] and [`IoSink`] adapt memory
//!   buffers and `std::io` types
//! - [`encrypt`] and [`decrypt`] transform a whole buffer at once
//!
//! Salsa20 provides confidentiality only. Never reuse a key and nonce pair.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher;
pub mod error;
pub mod source;
pub mod streaming;

pub use cipher::{decrypt, encrypt, generate_key, generate_nonce};
pub use error::{Error, Result};
pub use source::{IoSink, IoSource, SliceSource, VecSink};
pub use streaming::{Salsa20Reader, Salsa20Writer, StreamState};

pub use algorithms::{Rounds, Salsa20};
pub use salsastream_api::{ByteSink, ByteSource};
