//! Fixed-universe bitset: storage, elementwise access and bulk operations
//!
//! A [`BitSet`] represents a subset of `{0, ..., universe_size - 1}` as a
//! sequence of packed words. Bits past the end of the universe in the final
//! word are always zero, so equality, hashing and population counts can work
//! on whole words.

use alloc::vec::Vec;

use crate::error::{BitSetError, Result};
use crate::word::{self, Word, FULL_WORD, WORD_BITS};

/// Dense subset of a fixed universe of non-negative integers
///
/// Every accessor checks its index against the universe and reports
/// [`BitSetError::IndexOutOfRange`] instead of panicking.
///
/// # Examples
/// ```
/// use bitset_core::BitSet;
///
/// let mut bits = BitSet::new(8, false)?;
/// bits.set_bit(3)?;
/// bits.set_bit(5)?;
/// assert_eq!(bits.length(), 2);
/// assert_eq!(bits.to_string(), "00010100");
/// # Ok::<(), bitset_core::BitSetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "crate::encoding::RawBitSet"))]
pub struct BitSet {
    /// Number of representable elements
    universe_size: u64,
    /// Packed membership bits, `words_for_bits(universe_size)` long
    words: Vec<Word>,
}

/// Allocate storage for `universe_size` elements with every word set to `fill`
pub(crate) fn allocate_words(universe_size: u64, fill: Word) -> Result<Vec<Word>> {
    let failure = BitSetError::AllocationFailure {
        words: universe_size.div_ceil(WORD_BITS),
    };
    let len = word::words_for_bits(universe_size).ok_or(failure)?;

    let mut words = Vec::new();
    words.try_reserve_exact(len).map_err(|_| failure)?;
    words.resize(len, fill);
    Ok(words)
}

impl BitSet {
    /// Create a bitset over `universe_size` elements, all set or all clear
    pub fn new(universe_size: u64, initial_value: bool) -> Result<Self> {
        let fill = if initial_value { FULL_WORD } else { 0 };
        let words = allocate_words(universe_size, fill)?;

        let mut bits = Self {
            universe_size,
            words,
        };
        bits.clear_padding();
        Ok(bits)
    }

    /// Create a bitset with no elements
    pub fn empty(universe_size: u64) -> Result<Self> {
        Self::new(universe_size, false)
    }

    /// Create a bitset containing the whole universe
    pub fn full(universe_size: u64) -> Result<Self> {
        Self::new(universe_size, true)
    }

    /// Create a bitset holding exactly `elements`
    pub fn from_elements(
        universe_size: u64,
        elements: impl IntoIterator<Item = u64>,
    ) -> Result<Self> {
        let mut bits = Self::empty(universe_size)?;
        for element in elements {
            bits.set_bit(element)?;
        }
        Ok(bits)
    }

    /// Assemble a bitset from raw words, rejecting bad lengths or stray padding
    pub(crate) fn from_parts(universe_size: u64, words: Vec<Word>) -> Result<Self> {
        if word::words_for_bits(universe_size) != Some(words.len()) {
            return Err(BitSetError::InvalidEncoding);
        }

        let bits = Self {
            universe_size,
            words,
        };
        if !bits.has_canonical_padding() {
            return Err(BitSetError::InvalidEncoding);
        }
        Ok(bits)
    }

    /// Deep copy that reports allocation failure instead of aborting
    pub fn try_clone(&self) -> Result<Self> {
        let mut words = allocate_words(self.universe_size, 0)?;
        words.copy_from_slice(&self.words);
        Ok(Self {
            universe_size: self.universe_size,
            words,
        })
    }

    /// Number of representable elements
    #[inline]
    pub fn size_of_universe(&self) -> u64 {
        self.universe_size
    }

    /// Packed storage words, least significant bit first
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    pub(crate) fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    /// Word index and mask of `index`, or `IndexOutOfRange`
    #[inline]
    fn checked_locate(&self, index: u64) -> Result<(usize, Word)> {
        if index >= self.universe_size {
            return Err(BitSetError::IndexOutOfRange {
                index,
                universe_size: self.universe_size,
            });
        }
        Ok(word::locate(index))
    }

    /// Add `index` to the set
    pub fn set_bit(&mut self, index: u64) -> Result<()> {
        let (word_idx, mask) = self.checked_locate(index)?;
        self.words[word_idx] |= mask;
        Ok(())
    }

    /// Remove `index` from the set
    pub fn clear_bit(&mut self, index: u64) -> Result<()> {
        let (word_idx, mask) = self.checked_locate(index)?;
        self.words[word_idx] &= !mask;
        Ok(())
    }

    /// Toggle `index` and return its new membership
    pub fn flip_bit(&mut self, index: u64) -> Result<bool> {
        let (word_idx, mask) = self.checked_locate(index)?;
        self.words[word_idx] ^= mask;
        Ok(self.words[word_idx] & mask != 0)
    }

    /// Whether `index` is in the set
    pub fn test_bit(&self, index: u64) -> Result<bool> {
        let (word_idx, mask) = self.checked_locate(index)?;
        Ok(self.words[word_idx] & mask != 0)
    }

    /// Set or clear `index` according to `value`
    pub fn assign_bit(&mut self, index: u64, value: bool) -> Result<()> {
        let (word_idx, mask) = self.checked_locate(index)?;
        // Clear, then OR in the new value.
        let value_mask = (value as Word).wrapping_neg() & mask;
        self.words[word_idx] = (self.words[word_idx] & !mask) | value_mask;
        Ok(())
    }

    /// Add every element of the universe
    pub fn set_all(&mut self) {
        self.words.fill(FULL_WORD);
        self.clear_padding();
        debug_assert!(self.is_full());
    }

    /// Remove every element
    pub fn clear_all(&mut self) {
        self.words.fill(0);
        debug_assert!(self.is_empty());
    }

    /// Complement the set in place
    pub fn flip_all(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
        self.clear_padding();
    }

    /// Number of elements in the set
    pub fn length(&self) -> u64 {
        let total: u64 = self.words.iter().map(|w| w.count_ones() as u64).sum();
        debug_assert!(total <= self.universe_size);
        total
    }

    /// Returns `true` when no element is set
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns `true` when every element of the universe is set
    ///
    /// An empty universe is both empty and full.
    pub fn is_full(&self) -> bool {
        match self.words.split_last() {
            None => true,
            Some((&last, body)) => {
                body.iter().all(|&w| w == FULL_WORD)
                    && last == word::tail_mask(self.universe_size)
            }
        }
    }

    /// Overwrite this set with `other`, which may have a smaller universe
    ///
    /// Elements `[0, other.size_of_universe())` take `other`'s membership and
    /// every higher element is cleared.
    pub fn copy_in(&mut self, other: &BitSet) -> Result<()> {
        if other.universe_size > self.universe_size {
            return Err(BitSetError::IncompatibleUniverse {
                left: self.universe_size,
                right: other.universe_size,
            });
        }

        let (prefix, rest) = self.words.split_at_mut(other.words.len());
        prefix.copy_from_slice(&other.words);
        rest.fill(0);
        Ok(())
    }

    /// Zero the bits of the final word that lie outside the universe
    #[inline]
    pub(crate) fn clear_padding(&mut self) {
        let mask = word::tail_mask(self.universe_size);
        if let Some(last) = self.words.last_mut() {
            *last &= mask;
        }
    }

    pub(crate) fn has_canonical_padding(&self) -> bool {
        match self.words.last() {
            Some(&last) => last & !word::tail_mask(self.universe_size) == 0,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_empty() {
        let bits = BitSet::new(8, false).unwrap();
        assert!(bits.is_empty());
        assert!(!bits.is_full());
        assert_eq!(bits.length(), 0);
        assert_eq!(bits.size_of_universe(), 8);
    }

    #[test]
    fn test_construct_full_keeps_padding_clear() {
        let bits = BitSet::new(70, true).unwrap();
        assert!(bits.is_full());
        assert_eq!(bits.length(), 70);
        assert_eq!(bits.words(), &[FULL_WORD, 0b11_1111]);
    }

    #[test]
    fn test_empty_universe() {
        let bits = BitSet::new(0, true).unwrap();
        assert!(bits.is_empty());
        assert!(bits.is_full());
        assert_eq!(bits.length(), 0);
        assert!(bits.words().is_empty());
    }

    #[test]
    fn test_allocation_failure_is_reported() {
        assert_eq!(
            BitSet::new(u64::MAX, false),
            Err(BitSetError::AllocationFailure { words: 1 << 58 })
        );
    }

    #[test]
    fn test_elementwise_access() {
        let mut bits = BitSet::empty(8).unwrap();
        bits.set_bit(3).unwrap();
        bits.set_bit(5).unwrap();

        assert_eq!(bits.length(), 2);
        assert_eq!(bits.test_bit(3), Ok(true));
        assert_eq!(bits.test_bit(4), Ok(false));

        bits.clear_bit(3).unwrap();
        assert_eq!(bits.test_bit(3), Ok(false));
        assert_eq!(bits.length(), 1);
    }

    #[test]
    fn test_flip_bit_returns_new_value() {
        let mut bits = BitSet::empty(100).unwrap();
        assert_eq!(bits.flip_bit(77), Ok(true));
        assert_eq!(bits.flip_bit(77), Ok(false));
        assert!(bits.is_empty());
    }

    #[test]
    fn test_assign_bit() {
        let mut bits = BitSet::empty(10).unwrap();
        bits.assign_bit(4, true).unwrap();
        assert_eq!(bits.test_bit(4), Ok(true));
        bits.assign_bit(4, false).unwrap();
        assert_eq!(bits.test_bit(4), Ok(false));
    }

    #[test]
    fn test_index_out_of_range_leaves_set_untouched() {
        let mut bits = BitSet::empty(8).unwrap();
        let expected = Err(BitSetError::IndexOutOfRange {
            index: 8,
            universe_size: 8,
        });

        assert_eq!(bits.set_bit(8), expected);
        assert_eq!(bits.clear_bit(8), expected);
        assert_eq!(bits.test_bit(8).map(|_| ()), expected);
        assert_eq!(bits.flip_bit(8).map(|_| ()), expected);
        assert!(bits.is_empty());
    }

    #[test]
    fn test_padding_integrity() {
        let mut bits = BitSet::empty(5).unwrap();
        bits.set_all();
        assert!(bits.is_full());
        assert_eq!(bits.length(), 5);

        bits.flip_all();
        assert!(bits.is_empty());
        assert!(bits.has_canonical_padding());
    }

    #[test]
    fn test_bulk_ops_idempotent() {
        let mut bits = BitSet::empty(130).unwrap();
        bits.set_all();
        bits.set_all();
        assert!(bits.is_full());

        bits.clear_all();
        bits.clear_all();
        assert!(bits.is_empty());
    }

    #[test]
    fn test_is_full_detects_missing_bit_in_body() {
        let mut bits = BitSet::full(129).unwrap();
        bits.clear_bit(10).unwrap();
        assert!(!bits.is_full());
        assert_eq!(bits.length(), 128);
    }

    #[test]
    fn test_try_clone_is_independent() {
        let mut original = BitSet::empty(16).unwrap();
        original.set_bit(2).unwrap();

        let mut copy = original.try_clone().unwrap();
        assert_eq!(copy, original);

        copy.set_bit(9).unwrap();
        assert_eq!(original.test_bit(9), Ok(false));
        assert_ne!(copy, original);
    }

    #[test]
    fn test_copy_in_smaller_universe() {
        let mut small = BitSet::empty(5).unwrap();
        small.set_bit(1).unwrap();
        small.set_bit(4).unwrap();

        let mut large = BitSet::full(70).unwrap();
        large.copy_in(&small).unwrap();

        assert_eq!(large.length(), 2);
        assert_eq!(large.test_bit(1), Ok(true));
        assert_eq!(large.test_bit(4), Ok(true));
        assert_eq!(large.test_bit(69), Ok(false));
    }

    #[test]
    fn test_copy_in_larger_universe_fails() {
        let large = BitSet::full(16).unwrap();
        let mut small = BitSet::empty(8).unwrap();
        assert_eq!(
            small.copy_in(&large),
            Err(BitSetError::IncompatibleUniverse { left: 8, right: 16 })
        );
        assert!(small.is_empty());
    }

    #[test]
    fn test_from_parts_validation() {
        assert!(BitSet::from_parts(5, alloc::vec![0b1_0101]).is_ok());
        assert_eq!(
            BitSet::from_parts(5, alloc::vec![0b10_0000]),
            Err(BitSetError::InvalidEncoding)
        );
        assert_eq!(
            BitSet::from_parts(65, alloc::vec![0]),
            Err(BitSetError::InvalidEncoding)
        );
    }
}
