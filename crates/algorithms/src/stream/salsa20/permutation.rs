//! The Salsa20 permutation
//!
//! All arithmetic is modulo 2^32. The quarter-round index groups below are
//! the ones published with the algorithm; changing any of them changes every
//! output block.

use common::security::EphemeralSecret;
use internal::endian::{load_words_le, store_words_le};
use params::salsa20::{SALSA20_BLOCK_SIZE, SALSA20_STATE_WORDS};

use super::rounds::Rounds;

/// A full 16-word cipher state
pub type StateWords = [u32; SALSA20_STATE_WORDS];

/// Column groups, each read top to bottom starting on the diagonal
const COLUMNS: [[usize; 4]; 4] = [[0, 4, 8, 12], [5, 9, 13, 1], [10, 14, 2, 6], [15, 3, 7, 11]];

/// Row groups, each read left to right starting on the diagonal
const ROWS: [[usize; 4]; 4] = [[0, 1, 2, 3], [5, 6, 7, 4], [10, 11, 8, 9], [15, 12, 13, 14]];

/// Rotate a word left by `shift` bits
#[inline(always)]
pub fn rotl(value: u32, shift: u32) -> u32 {
    value.rotate_left(shift)
}

/// Apply one quarter-round to the words at positions `a`, `b`, `c`, `d`
#[inline]
pub fn quarter_round(state: &mut StateWords, a: usize, b: usize, c: usize, d: usize) {
    state[b] ^= rotl(state[a].wrapping_add(state[d]), 7);
    state[c] ^= rotl(state[b].wrapping_add(state[a]), 9);
    state[d] ^= rotl(state[c].wrapping_add(state[b]), 13);
    state[a] ^= rotl(state[d].wrapping_add(state[c]), 18);
}

/// Quarter-round each of the four columns
#[inline]
pub fn column_round(state: &mut StateWords) {
    for [a, b, c, d] in COLUMNS {
        quarter_round(state, a, b, c, d);
    }
}

/// Quarter-round each of the four rows
#[inline]
pub fn row_round(state: &mut StateWords) {
    for [a, b, c, d] in ROWS {
        quarter_round(state, a, b, c, d);
    }
}

/// A column round followed by a row round
#[inline]
pub fn double_round(state: &mut StateWords) {
    column_round(state);
    row_round(state);
}

/// Run the core function over `input` and serialize the result into `output`
///
/// The rounds operate on a scratch copy; `input` is added back word-wise
/// before serialization.
pub fn salsa20_core_into(input: &StateWords, rounds: Rounds, output: &mut [u8; SALSA20_BLOCK_SIZE]) {
    let mut working = EphemeralSecret::new(*input);

    for _ in 0..rounds.double_rounds() {
        double_round(&mut working);
    }

    for (word, original) in working.iter_mut().zip(input.iter()) {
        *word = word.wrapping_add(*original);
    }

    store_words_le(&working[..], output);
}

/// The Salsa20 core function on sixteen input words
pub fn salsa20_core_words(input: &StateWords, rounds: Rounds) -> [u8; SALSA20_BLOCK_SIZE] {
    let mut output = [0u8; SALSA20_BLOCK_SIZE];
    salsa20_core_into(input, rounds, &mut output);
    output
}

/// The Salsa20 core function (the "Salsa20 hash") on a 64-byte input
pub fn salsa20_core(input: &[u8; SALSA20_BLOCK_SIZE], rounds: Rounds) -> [u8; SALSA20_BLOCK_SIZE] {
    let mut words = EphemeralSecret::new([0u32; SALSA20_STATE_WORDS]);
    load_words_le(input, &mut words[..]);
    salsa20_core_words(&words, rounds)
}
