//! Endianness utility functions
//!
//! Salsa20 reads and writes every state word in little-endian order. The
//! slice-based helpers below panic when handed fewer bytes than they need;
//! callers validate lengths before reaching them.

/// Convert a u32 from little-endian byte order to native byte order
#[inline]
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Convert a u32 from native byte order to little-endian bytes
#[inline]
pub fn u32_to_le_bytes(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Fill `words` from consecutive little-endian 4-byte groups of `bytes`
///
/// Reads exactly `words.len() * 4` bytes.
#[inline]
pub fn load_words_le(bytes: &[u8], words: &mut [u32]) {
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32_from_le_bytes(chunk);
    }
}

/// Serialize `words` into `out` as consecutive little-endian 4-byte groups
#[inline]
pub fn store_words_le(words: &[u32], out: &mut [u8]) {
    for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&u32_to_le_bytes(*word));
    }
}

/// Split a 64-bit value into its (low, high) 32-bit halves
#[inline]
pub fn u64_to_u32_pair(value: u64) -> (u32, u32) {
    (value as u32, (value >> 32) as u32)
}

/// Join (low, high) 32-bit halves into a 64-bit value
#[inline]
pub fn u32_pair_to_u64(low: u32, high: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}
