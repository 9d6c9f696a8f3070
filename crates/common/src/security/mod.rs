//! Security primitives and memory safety utilities
//!
//! This module provides the foundational types used throughout salsastream to
//! keep key bytes and keystream intermediates out of freed memory.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer};
