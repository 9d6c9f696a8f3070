//! Salsa20 stream cipher primitives
//!
//! This crate provides the Salsa20 permutation, the key schedule, the
//! counter-mode keystream generator and the byte cursor that exposes the
//! keystream to callers. It is usable in both `std` and `no_std`
//! environments.
//!
//! # Security Features
//!
//! - Cipher state, keystream buffers and round scratch space are zeroized
//!   when dropped
//! - `Debug` output never includes key or keystream material

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Stream cipher implementations
pub mod stream;
pub use stream::salsa20::{
    salsa20_core, salsa20_core_words, CipherState, Rounds, Salsa20, StateWords,
};

// Keystream traits implemented by the cipher
pub use salsastream_api::traits::{IntegerWidth, KeystreamInteger, RandomGenerator, StreamCipher};
