//! Salsa20 stream cipher implementation
//!
//! This module implements the Salsa20/20, Salsa20/12 and Salsa20/8 stream
//! ciphers with 128- or 256-bit keys and a 64-bit nonce.
//!
//! Keystream is produced one 64-byte block at a time and consumed through a
//! byte cursor. When the cursor reaches the end of the block the next block
//! is generated and the cursor returns to the start. Output matches the
//! published Salsa20 test vectors bit for bit.
//!
//! This is a bare keystream generator; it provides no integrity protection,
//! and callers must never reuse a key and nonce pair.

use core::fmt;

use params::salsa20::SALSA20_BLOCK_SIZE;
use salsastream_api::error::Result as CoreResult;
use salsastream_api::traits::RandomGenerator;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{to_core_result, validate, Result};

pub mod permutation;
pub mod rounds;
pub mod state;

pub use self::permutation::{salsa20_core, salsa20_core_words, StateWords};
pub use self::rounds::Rounds;
pub use self::state::CipherState;

pub use params::salsa20::{
    SALSA20_BLOCK_SIZE as BLOCK_SIZE, SALSA20_KEY_SIZE_128 as KEY_SIZE_128,
    SALSA20_KEY_SIZE_256 as KEY_SIZE_256, SALSA20_NONCE_SIZE as NONCE_SIZE,
};

/// Salsa20 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salsa20 {
    /// Key, nonce and the counter of the next block to generate
    state: CipherState,
    /// Most recently generated keystream block
    buffer: [u8; SALSA20_BLOCK_SIZE],
    /// Next unread byte in `buffer`; `SALSA20_BLOCK_SIZE` means exhausted
    position: usize,
    #[zeroize(skip)]
    rounds: Rounds,
}

impl Salsa20 {
    /// Creates a Salsa20/20 instance from a 16- or 32-byte key and an 8-byte nonce
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        Self::with_rounds(key, nonce, Rounds::default())
    }

    /// Creates an instance running the given number of rounds
    pub fn with_rounds(key: &[u8], nonce: &[u8], rounds: Rounds) -> Result<Self> {
        let state = CipherState::new(key, nonce)?;
        Ok(Self {
            state,
            buffer: [0; SALSA20_BLOCK_SIZE],
            position: SALSA20_BLOCK_SIZE, // Force initial keystream generation
            rounds,
        })
    }

    /// The round variant fixed at construction
    pub fn rounds(&self) -> Rounds {
        self.rounds
    }

    /// Read-only view of the cipher state
    pub fn state(&self) -> &CipherState {
        &self.state
    }

    /// Generate the next keystream block into the buffer and rewind the cursor
    fn refill(&mut self) {
        self.state.generate_block(self.rounds, &mut self.buffer);
        self.position = 0;
    }

    /// Return the next keystream byte
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        if self.position >= SALSA20_BLOCK_SIZE {
            self.refill();
        }
        let value = self.buffer[self.position];
        self.position += 1;
        value
    }

    /// XOR the keystream into `data` in place
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        let mut offset = 0;
        while offset < data.len() {
            if self.position >= SALSA20_BLOCK_SIZE {
                self.refill();
            }
            let take = (SALSA20_BLOCK_SIZE - self.position).min(data.len() - offset);
            let keystream = &self.buffer[self.position..self.position + take];
            for (byte, key) in data[offset..offset + take].iter_mut().zip(keystream) {
                *byte ^= key;
            }
            self.position += take;
            offset += take;
        }
    }

    /// XOR `input` against the keystream into `output`
    ///
    /// The buffers must be the same length; an empty input is a no-op.
    pub fn xor(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        validate::length("Salsa20 xor output", output.len(), input.len())?;
        output.copy_from_slice(input);
        self.apply_keystream(output);
        Ok(())
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) {
        self.apply_keystream(data);
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.apply_keystream(data);
    }

    /// Write raw keystream bytes into `output`, continuing from the cursor
    pub fn keystream(&mut self, output: &mut [u8]) {
        output.zeroize();
        self.apply_keystream(output);
    }

    /// Restart the keystream at block 0 with the same key and nonce
    pub fn reset(&mut self) {
        self.set_block_pos(0);
    }

    /// Counter of the next block that will be generated
    pub fn block_pos(&self) -> u64 {
        self.state.counter()
    }

    /// Set the counter of the next block and drop any buffered keystream
    pub fn set_block_pos(&mut self, block: u64) {
        self.state.set_counter(block);
        self.position = SALSA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }

    /// Absolute byte offset of the next keystream byte
    pub fn current_pos(&self) -> u64 {
        let next_block = self.state.counter();
        if self.position >= SALSA20_BLOCK_SIZE {
            next_block.wrapping_mul(SALSA20_BLOCK_SIZE as u64)
        } else {
            next_block
                .wrapping_sub(1)
                .wrapping_mul(SALSA20_BLOCK_SIZE as u64)
                .wrapping_add(self.position as u64)
        }
    }

    /// Position the cursor at an absolute byte offset in the keystream
    pub fn seek(&mut self, offset: u64) {
        let block = offset / SALSA20_BLOCK_SIZE as u64;
        let within = (offset % SALSA20_BLOCK_SIZE as u64) as usize;

        self.set_block_pos(block);
        if within != 0 {
            self.refill();
            self.position = within;
        }
    }
}

impl RandomGenerator for Salsa20 {
    fn next_byte(&mut self) -> u8 {
        Salsa20::next_byte(self)
    }

    fn reset(&mut self) {
        Salsa20::reset(self);
    }

    fn xor(&mut self, input: &[u8], output: &mut [u8]) -> CoreResult<()> {
        to_core_result(Salsa20::xor(self, input, output), "Salsa20::xor")
    }
}

impl fmt::Debug for Salsa20 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salsa20")
            .field("rounds", &self.rounds)
            .field("position", &self.current_pos())
            .finish_non_exhaustive()
    }
}
