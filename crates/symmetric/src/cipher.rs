//! One-shot Salsa20 helpers and key material generation
//!
//! ```
//! use salsastream_symmetric::{decrypt, encrypt, generate_key, generate_nonce};
//!
//! let key = generate_key();
//! let nonce = generate_nonce();
//!
//! let ciphertext = encrypt(key.as_slice(), &nonce, b"attack at dawn")?;
//! let plaintext = decrypt(key.as_slice(), &nonce, &ciphertext)?;
//! assert_eq!(plaintext, b"attack at dawn");
//! # Ok::<(), salsastream_symmetric::Error>(())
//! ```

use common::security::SecretBuffer;
use params::salsa20::{SALSA20_KEY_SIZE_256, SALSA20_NONCE_SIZE};
use rand::rngs::OsRng;
use rand::RngCore;
use salsastream_api::ByteSource;

use crate::error::{Error, Result};
use crate::source::SliceSource;
use crate::streaming::Salsa20Reader;

/// Encrypt `data` with Salsa20/20 starting at block 0
pub fn encrypt(key: &[u8], nonce: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut reader = Salsa20Reader::new(SliceSource::new(data), key, nonce)?;

    let mut output = vec![0u8; data.len()];
    let mut filled = 0;
    while filled < output.len() {
        let n = reader.read(&mut output[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    if filled != data.len() {
        return Err(Error::LengthMismatch {
            context: "Salsa20 one-shot",
            expected: data.len(),
            actual: filled,
        });
    }
    Ok(output)
}

/// Decrypt `data` with Salsa20/20; the same transform as [`encrypt`]
pub fn decrypt(key: &[u8], nonce: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    encrypt(key, nonce, data)
}

/// Generate a random 256-bit key from the operating system RNG
pub fn generate_key() -> SecretBuffer<SALSA20_KEY_SIZE_256> {
    SecretBuffer::random(&mut OsRng)
}

/// Generate a random 8-byte nonce from the operating system RNG
///
/// With 64-bit nonces, random generation is only safe for a modest number of
/// messages per key.
pub fn generate_nonce() -> [u8; SALSA20_NONCE_SIZE] {
    let mut nonce = [0u8; SALSA20_NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);
    nonce
}
