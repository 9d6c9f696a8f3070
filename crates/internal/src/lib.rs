//! Internal utilities for the salsastream library
//!
//! Not part of the public API surface; the helpers here are shared by the
//! cipher core and may change between releases.

#![no_std]
#![forbid(unsafe_code)]

pub mod endian;
