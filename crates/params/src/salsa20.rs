//! Constants for the Salsa20 stream cipher family

/// Key size in bytes for a 256-bit key
pub const SALSA20_KEY_SIZE_256: usize = 32;

/// Key size in bytes for a 128-bit key
pub const SALSA20_KEY_SIZE_128: usize = 16;

/// Nonce size in bytes
pub const SALSA20_NONCE_SIZE: usize = 8;

/// Keystream block size in bytes
pub const SALSA20_BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the cipher state
pub const SALSA20_STATE_WORDS: usize = 16;

/// "expand 32-byte k", the constant words used with 256-bit keys
pub const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// "expand 16-byte k", the constant words used with 128-bit keys
pub const TAU: [u32; 4] = [0x6170_7865, 0x3120_646e, 0x7962_2d36, 0x6b20_6574];

/// State positions holding the four constant words
pub const CONSTANT_WORDS: [usize; 4] = [0, 5, 10, 15];

/// First state position of the first key half (words 1..=4)
pub const KEY_LOW_OFFSET: usize = 1;

/// First state position of the second key half (words 11..=14)
pub const KEY_HIGH_OFFSET: usize = 11;

/// First state position of the nonce (words 6..=7)
pub const NONCE_OFFSET: usize = 6;

/// State position of the low counter word
pub const COUNTER_LOW: usize = 8;

/// State position of the high counter word
pub const COUNTER_HIGH: usize = 9;

/// Double rounds performed by Salsa20/20
pub const SALSA20_20_DOUBLE_ROUNDS: usize = 10;

/// Double rounds performed by Salsa20/12
pub const SALSA20_12_DOUBLE_ROUNDS: usize = 6;

/// Double rounds performed by Salsa20/8
pub const SALSA20_8_DOUBLE_ROUNDS: usize = 4;
