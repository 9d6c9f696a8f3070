//! Round-count variants of the Salsa20 family

use params::salsa20::{SALSA20_12_DOUBLE_ROUNDS, SALSA20_20_DOUBLE_ROUNDS, SALSA20_8_DOUBLE_ROUNDS};

/// Number of rounds applied per keystream block
///
/// Fixed when a cipher is constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounds {
    /// Salsa20/8: 4 double rounds
    R8,
    /// Salsa20/12: 6 double rounds
    R12,
    /// Salsa20/20: 10 double rounds
    #[default]
    R20,
}

impl Rounds {
    /// Double rounds performed per block
    pub const fn double_rounds(self) -> usize {
        match self {
            Rounds::R8 => SALSA20_8_DOUBLE_ROUNDS,
            Rounds::R12 => SALSA20_12_DOUBLE_ROUNDS,
            Rounds::R20 => SALSA20_20_DOUBLE_ROUNDS,
        }
    }

    /// Total rounds (8, 12 or 20)
    pub const fn count(self) -> usize {
        self.double_rounds() * 2
    }

    /// Look up a variant by its total round count
    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            8 => Some(Rounds::R8),
            12 => Some(Rounds::R12),
            20 => Some(Rounds::R20),
            _ => None,
        }
    }
}
