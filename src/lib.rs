//! # salsastream
//!
//! A Salsa20 stream cipher engine: the Salsa20/8, Salsa20/12 and Salsa20/20
//! keystream generator, a byte-cursor random generator over it, and streaming
//! adapters that encrypt arbitrary byte sources.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! salsastream = "0.3"
//! ```
//!
//! ```
//! use salsastream::prelude::*;
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 8];
//!
//! let mut cipher = Salsa20::new(&key, &nonce)?;
//! let mut data = *b"hello world";
//! cipher.apply_keystream(&mut data);
//!
//! cipher.reset();
//! cipher.apply_keystream(&mut data);
//! assert_eq!(&data, b"hello world");
//! # Ok::<(), salsastream::algorithms::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and the standard library
//! - `alloc`: heap-backed helpers without `std`
//! - `streaming` (default): reader/writer adapters from `salsastream-symmetric`
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`salsastream-api`]: Error type and capability traits
//! - [`salsastream-algorithms`]: The Salsa20 permutation, key schedule and keystream
//! - [`salsastream-symmetric`]: Streaming readers, writers and one-shot helpers

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use salsastream_algorithms as algorithms;
pub use salsastream_api as api;
pub use salsastream_common as common;
pub use salsastream_internal as internal;
pub use salsastream_params as params;

// Zeroization traits for callers holding their own key material
pub use zeroize;

// Feature-gated re-exports
#[cfg(feature = "streaming")]
pub use salsastream_symmetric as symmetric;

/// Common imports for salsastream users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{
        ByteSink, ByteSource, IntegerWidth, KeystreamInteger, RandomGenerator, StreamCipher,
    };

    // Re-export the cipher
    pub use crate::algorithms::{Rounds, Salsa20};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer};

    #[cfg(feature = "streaming")]
    pub use crate::symmetric::{
        IoSink, IoSource, Salsa20Reader, Salsa20Writer, SliceSource, StreamState, VecSink,
    };
}
