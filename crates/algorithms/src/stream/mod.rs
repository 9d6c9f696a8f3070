//! Stream cipher implementations
//!
//! This module provides the Salsa20 family of stream ciphers, which encrypt
//! data by XORing it with a pseudorandom keystream derived from a key, a
//! nonce and a block counter.
//!
//! # Security Considerations
//!
//! Stream ciphers require unique nonces for each encryption operation with the
//! same key. Reusing a nonce with the same key completely breaks the security
//! of the cipher.

/// Salsa20 family of stream cipher implementations
pub mod salsa20;

// Re-export commonly used types
pub use salsa20::{Rounds, Salsa20};

use params::salsa20::{
    SALSA20_BLOCK_SIZE, SALSA20_KEY_SIZE_128, SALSA20_KEY_SIZE_256, SALSA20_NONCE_SIZE,
};
use salsastream_api::error::Result;
use salsastream_api::traits::StreamCipher;

impl StreamCipher for Salsa20 {
    const KEY_SIZES: &'static [usize] = &[SALSA20_KEY_SIZE_128, SALSA20_KEY_SIZE_256];
    const NONCE_SIZE: usize = SALSA20_NONCE_SIZE;
    const BLOCK_SIZE: usize = SALSA20_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_keystream(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        Salsa20::keystream(self, output);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        Salsa20::reset(self);
        Ok(())
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        Salsa20::seek(self, position);
        Ok(())
    }
}
