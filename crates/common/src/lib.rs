//! Common implementations and shared functionality for the salsastream library
//!
//! This crate provides the zeroizing containers the cipher uses to hold key
//! material and intermediate round state.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer};
