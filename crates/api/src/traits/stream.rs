//! Keystream traits
//!
//! [`StreamCipher`] is the whole-buffer view of a keystream cipher.
//! [`RandomGenerator`] is the byte-cursor view: the keystream is consumed one
//! byte at a time, either XORed against caller data or reassembled into
//! unsigned integers.

use crate::error::{validate, Result};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer types that can be drawn from a keystream
///
/// Integers are assembled from consecutive keystream bytes in little-endian
/// order: the first byte drawn is the least significant.
pub trait KeystreamInteger: sealed::Sealed + Copy {
    /// Number of keystream bytes consumed per value
    const BYTES: usize;

    /// Assemble a value from exactly `Self::BYTES` little-endian bytes
    fn from_keystream_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_keystream_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl KeystreamInteger for $t {
                const BYTES: usize = core::mem::size_of::<$t>();

                #[inline]
                fn from_keystream_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; core::mem::size_of::<$t>()];
                    buf.copy_from_slice(&bytes[..Self::BYTES]);
                    <$t>::from_le_bytes(buf)
                }
            }
        )*
    };
}

impl_keystream_integer!(u8, u16, u32, u64, u128);

/// Explicit integer widths for callers that select the width at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    /// 8-bit value
    W8,
    /// 16-bit value
    W16,
    /// 32-bit value
    W32,
    /// 64-bit value
    W64,
}

impl IntegerWidth {
    /// Width in bits
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Keystream bytes consumed for this width
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Map a bit count onto a supported width
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::W8),
            16 => Some(Self::W16),
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }
}

/// Byte-at-a-time access to a keystream
pub trait RandomGenerator {
    /// Return the next keystream byte, generating a new block when needed
    fn next_byte(&mut self) -> u8;

    /// Restart the keystream from block 0 of the same key and nonce
    fn reset(&mut self);

    /// XOR `input` against the keystream into `output`
    ///
    /// Both buffers must have the same length. Empty buffers are a no-op and
    /// do not advance the keystream.
    fn xor(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        validate::length("keystream xor output", output.len(), input.len())?;
        for (out, byte) in output.iter_mut().zip(input) {
            *out = byte ^ self.next_byte();
        }
        Ok(())
    }

    /// Draw `T::BYTES` keystream bytes and return them as a little-endian integer
    fn next_integer<T: KeystreamInteger>(&mut self) -> T
    where
        Self: Sized,
    {
        let mut buf = [0u8; 16];
        for byte in buf[..T::BYTES].iter_mut() {
            *byte = self.next_byte();
        }
        T::from_keystream_bytes(&buf[..T::BYTES])
    }

    /// Draw an integer of a runtime-selected width, widened to `u64`
    fn next_uint(&mut self, width: IntegerWidth) -> u64 {
        let mut value = 0u64;
        for shift in 0..width.bytes() {
            value |= u64::from(self.next_byte()) << (8 * shift);
        }
        value
    }
}

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// Accepted key sizes in bytes
    const KEY_SIZES: &'static [usize];

    /// The nonce size in bytes
    const NONCE_SIZE: usize;

    /// The internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Process data in place (encrypts for encryption, decrypts for decryption)
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;

    /// Reset the cipher to the start of its keystream
    fn reset(&mut self) -> Result<()>;

    /// Seek to an absolute byte offset in the keystream
    fn seek(&mut self, position: u64) -> Result<()>;
}
