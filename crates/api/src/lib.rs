//! Public API traits and types for the salsastream library
//!
//! This crate provides the public API surface shared by the cipher and the
//! streaming adapters: the unified error type, validation helpers, and the
//! capability traits every keystream generator and byte stream implements.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{
    ByteSink, ByteSource, IntegerWidth, KeystreamInteger, RandomGenerator, StreamCipher,
};

// Re-export trait modules for direct access
pub use traits::{io, stream};
