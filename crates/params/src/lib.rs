//! Constant values for salsastream cryptographic operations
//!
//! This library provides the constants shared by the key schedule, the
//! keystream generator and the streaming adapters.

#![no_std]

pub mod salsa20;
