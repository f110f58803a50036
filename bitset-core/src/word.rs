//! Packed word layout for bitset storage
//!
//! Element `i` of a universe lives in word `i / WORD_BITS`, at bit
//! `i % WORD_BITS` counted from the least significant end. Everything that
//! needs to translate between element indices and storage goes through here.

/// Storage unit of a bitset
pub type Word = u64;

/// Number of elements held by one storage word
pub const WORD_BITS: u64 = Word::BITS as u64;

/// A word with every bit set
pub const FULL_WORD: Word = Word::MAX;

/// Number of words needed to hold a universe of `universe_size` elements
///
/// Returns `None` when the count does not fit in `usize` on this target.
pub fn words_for_bits(universe_size: u64) -> Option<usize> {
    usize::try_from(universe_size.div_ceil(WORD_BITS)).ok()
}

/// Word index and single-bit mask for element `index`
#[inline]
pub const fn locate(index: u64) -> (usize, Word) {
    ((index / WORD_BITS) as usize, 1 << (index % WORD_BITS))
}

/// Mask of the valid bits in the final word of a universe
///
/// A universe that fills its last word exactly gets a full mask.
#[inline]
pub const fn tail_mask(universe_size: u64) -> Word {
    match universe_size % WORD_BITS {
        0 => FULL_WORD,
        rem => (1 << rem) - 1,
    }
}

/// Mask keeping bits at offsets `>= offset` within a word
#[inline]
pub(crate) const fn mask_from(offset: u64) -> Word {
    FULL_WORD << offset
}

/// Mask keeping bits at offsets `<= offset` within a word
#[inline]
pub(crate) const fn mask_through(offset: u64) -> Word {
    FULL_WORD >> (WORD_BITS - 1 - offset)
}
