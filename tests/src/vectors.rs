//! Published Salsa20 keystream vectors
//!
//! ECRYPT Set 1, vector 0 (key `80 00 .. 00`, nonce all zero) for every
//! round variant and key size, plus Bernstein's all-zero key example.

use salsastream_algorithms::Rounds;

/// One keystream block at a known block index
#[derive(Debug, Clone, Copy)]
pub struct KeystreamVector {
    /// Human-readable name
    pub name: &'static str,
    /// Hex-encoded key
    pub key: &'static str,
    /// Hex-encoded nonce
    pub nonce: &'static str,
    /// Round variant
    pub rounds: Rounds,
    /// Block counter of `block`
    pub block_index: u64,
    /// Hex-encoded 64-byte keystream block
    pub block: &'static str,
}

impl KeystreamVector {
    /// Decoded key bytes
    pub fn key_bytes(&self) -> Vec<u8> {
        decode(self.key)
    }

    /// Decoded nonce bytes
    pub fn nonce_bytes(&self) -> Vec<u8> {
        decode(self.nonce)
    }

    /// Decoded keystream block
    pub fn block_bytes(&self) -> Vec<u8> {
        decode(self.block)
    }
}

fn decode(s: &str) -> Vec<u8> {
    match hex::decode(s) {
        Ok(bytes) => bytes,
        Err(e) => panic!("malformed vector hex {:?}: {}", s, e),
    }
}

const KEY_128: &str = "80000000000000000000000000000000";
const KEY_256: &str = "8000000000000000000000000000000000000000000000000000000000000000";
const ZERO_KEY_256: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const ZERO_NONCE: &str = "0000000000000000";

/// Every vector known to the suite
pub const VECTORS: &[KeystreamVector] = &[
    KeystreamVector {
        name: "all-zero key, block 0",
        key: ZERO_KEY_256,
        nonce: ZERO_NONCE,
        rounds: Rounds::R20,
        block_index: 0,
        block: "9a97f65b9b4c721b960a672145fca8d4e32e67f9111ea979ce9c4826806aeee6\
                3de9c0da2bd7f91ebcb2639bf989c6251b29bf38d39a9bdce7c55f4b2ac12a39",
    },
    KeystreamVector {
        name: "all-zero key, block 1",
        key: ZERO_KEY_256,
        nonce: ZERO_NONCE,
        rounds: Rounds::R20,
        block_index: 1,
        block: "abea8a17646d1a7782f4f2ae5e9f2bdeac1241460ba80bd5beefbf8794988834\
                c4d94bb6c9134d512664c90dd0ecbb218d5a24fffb69ceb42f5efab584be6e10",
    },
    KeystreamVector {
        name: "all-zero key, block 2^32 - 1",
        key: ZERO_KEY_256,
        nonce: ZERO_NONCE,
        rounds: Rounds::R20,
        block_index: 0xffff_ffff,
        block: "59fc4dd73f4b7b28ce1b0ef562bab604824076898a800797b59902a99f312254\
                5231e85b887ffa19f71f24aaf352dc6afe47281d8f546c9d419194479a369392",
    },
    KeystreamVector {
        name: "all-zero key, block 2^32",
        key: ZERO_KEY_256,
        nonce: ZERO_NONCE,
        rounds: Rounds::R20,
        block_index: 0x1_0000_0000,
        block: "b65fc777c4f950ec0274ff0ffbb0a6e3ededf78477e94945e87f26e3162bf6a1\
                050933421833f249da1162db6e92a7678505190c80dc46350b81e831f974b28c",
    },
    KeystreamVector {
        name: "Salsa20/20 256-bit set 1 vector 0",
        key: KEY_256,
        nonce: ZERO_NONCE,
        rounds: Rounds::R20,
        block_index: 0,
        block: "e3be8fdd8beca2e3ea8ef9475b29a6e7003951e1097a5c38d23b7a5fad9f6844\
                b22c97559e2723c7cbbd3fe4fc8d9a0744652a83e72a9c461876af4d7ef1a117",
    },
    KeystreamVector {
        name: "Salsa20/12 256-bit set 1 vector 0",
        key: KEY_256,
        nonce: ZERO_NONCE,
        rounds: Rounds::R12,
        block_index: 0,
        block: "afe411ed1c4e07e4d0cde3b33e31ec190fa4cc796a58bafb848ead8d07d02cd2\
                d4b6f9f30cb0b57007e3733895cc8d1060107975acaeeb689b6cf614ab64a3d6",
    },
    KeystreamVector {
        name: "Salsa20/8 256-bit set 1 vector 0",
        key: KEY_256,
        nonce: ZERO_NONCE,
        rounds: Rounds::R8,
        block_index: 0,
        block: "b1f599e9b0d96df436ae31f5ef589565b92d245db5a1d4c7a78e5e8d0146f8a4\
                9d326c1a3bf50c052c9c8f114dc74972c4469591e31c9ed11927aa9871f38583",
    },
    KeystreamVector {
        name: "Salsa20/20 128-bit set 1 vector 0",
        key: KEY_128,
        nonce: ZERO_NONCE,
        rounds: Rounds::R20,
        block_index: 0,
        block: "4dfa5e481da23ea09a31022050859936da52fcee218005164f267cb65f5cfd7f\
                2b4f97e0ff16924a52df269515110a07f9e460bc65ef95da58f740b7d1dbb0aa",
    },
    KeystreamVector {
        name: "Salsa20/20 128-bit set 1 vector 0, block 1",
        key: KEY_128,
        nonce: ZERO_NONCE,
        rounds: Rounds::R20,
        block_index: 1,
        block: "d64cec189c7eb8c6bbf3d7376c80a481d43e628701f6a27afb9fe23919f24114\
                8db44f70d7063efcc3dd55a0893a613c3c6fe1c127bd6f59910589293bb6ef9e",
    },
    KeystreamVector {
        name: "Salsa20/12 128-bit set 1 vector 0",
        key: KEY_128,
        nonce: ZERO_NONCE,
        rounds: Rounds::R12,
        block_index: 0,
        block: "fc207dbfc76c5e1774961e7a5aad09069b2225ac1ce0fe7a0ce77003e7e5bdf8\
                b31af821000813e6c56b8c1771d6ee7039b2fbd0a68e8ad70a3944b677937897",
    },
    KeystreamVector {
        name: "Salsa20/8 128-bit set 1 vector 0",
        key: KEY_128,
        nonce: ZERO_NONCE,
        rounds: Rounds::R8,
        block_index: 0,
        block: "a9c9f888ab552a2d1bbff9f36bebeb337a8b4b107c75b63bae26cb9a235bba9d\
                784f38befc3adf4cd3e266687ea7b9f09ba650ae81eac6063ae31ff12218ddc5",
    },
];
