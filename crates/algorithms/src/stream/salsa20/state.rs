//! Cipher state and key schedule
//!
//! Word layout of the 4x4 state:
//!
//! ```text
//!  c0  k0  k1  k2
//!  k3  c1  n0  n1
//!  t0  t1  c2  k4
//!  k5  k6  k7  c3
//! ```
//!
//! `c` are the constant words, `k` the key words, `n` the nonce and `t` the
//! 64-bit block counter (low word first). A 16-byte key fills both key halves
//! with the same bytes and selects the TAU constants instead of SIGMA.

use common::security::SecretBuffer;
use internal::endian::{load_words_le, u32_pair_to_u64, u64_to_u32_pair};
use params::salsa20::{
    CONSTANT_WORDS, COUNTER_HIGH, COUNTER_LOW, KEY_HIGH_OFFSET, KEY_LOW_OFFSET, NONCE_OFFSET,
    SALSA20_BLOCK_SIZE, SALSA20_KEY_SIZE_128, SALSA20_KEY_SIZE_256, SALSA20_STATE_WORDS, SIGMA,
    TAU,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::permutation::{salsa20_core_into, StateWords};
use super::rounds::Rounds;
use crate::error::{validate, Result};

/// The sixteen-word Salsa20 input state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherState {
    words: StateWords,
}

impl CipherState {
    /// Build a state from a 16- or 32-byte key and an 8-byte nonce
    ///
    /// The block counter starts at zero.
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        validate::key_size(key.len())?;
        validate::nonce_size(nonce.len())?;

        let mut state = Self { words: [0u32; SALSA20_STATE_WORDS] };

        if key.len() == SALSA20_KEY_SIZE_256 {
            let mut key_buf = SecretBuffer::<SALSA20_KEY_SIZE_256>::zeroed();
            key_buf.as_mut_slice().copy_from_slice(key);
            state.expand_key(&SIGMA, &key_buf.as_slice()[..16], &key_buf.as_slice()[16..]);
        } else {
            let mut key_buf = SecretBuffer::<SALSA20_KEY_SIZE_128>::zeroed();
            key_buf.as_mut_slice().copy_from_slice(key);
            state.expand_key(&TAU, key_buf.as_slice(), key_buf.as_slice());
        }

        load_words_le(nonce, &mut state.words[NONCE_OFFSET..NONCE_OFFSET + 2]);
        state.set_counter(0);

        Ok(state)
    }

    /// Wrap raw state words without applying the key schedule
    pub fn from_words(words: StateWords) -> Self {
        Self { words }
    }

    fn expand_key(&mut self, constants: &[u32; 4], low: &[u8], high: &[u8]) {
        for (&position, &constant) in CONSTANT_WORDS.iter().zip(constants.iter()) {
            self.words[position] = constant;
        }
        load_words_le(low, &mut self.words[KEY_LOW_OFFSET..KEY_LOW_OFFSET + 4]);
        load_words_le(high, &mut self.words[KEY_HIGH_OFFSET..KEY_HIGH_OFFSET + 4]);
    }

    /// The current state words
    pub fn words(&self) -> &StateWords {
        &self.words
    }

    /// The 64-bit block counter held in words 8 (low) and 9 (high)
    pub fn counter(&self) -> u64 {
        u32_pair_to_u64(self.words[COUNTER_LOW], self.words[COUNTER_HIGH])
    }

    /// Overwrite the block counter
    pub fn set_counter(&mut self, counter: u64) {
        let (low, high) = u64_to_u32_pair(counter);
        self.words[COUNTER_LOW] = low;
        self.words[COUNTER_HIGH] = high;
    }

    /// Advance the block counter by one
    ///
    /// The high word is carried into only when the low word wraps to zero. A
    /// wrap of the high word is not detected.
    pub fn increment_counter(&mut self) {
        self.words[COUNTER_LOW] = self.words[COUNTER_LOW].wrapping_add(1);
        if self.words[COUNTER_LOW] == 0 {
            self.words[COUNTER_HIGH] = self.words[COUNTER_HIGH].wrapping_add(1);
        }
    }

    /// Produce the keystream block for the current counter, then advance it
    ///
    /// Only the counter words change.
    pub fn generate_block(&mut self, rounds: Rounds, block: &mut [u8; SALSA20_BLOCK_SIZE]) {
        salsa20_core_into(&self.words, rounds, block);
        self.increment_counter();
    }
}
