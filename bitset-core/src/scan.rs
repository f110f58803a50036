//! Directional nearest-element queries and ascending iteration
//!
//! Scans walk word by word from the word containing the start position,
//! masking off the out-of-range side of that first word. Padding bits are
//! always clear, so a hit is always inside the universe.

use core::iter::FusedIterator;

use crate::bitset::BitSet;
use crate::word::{self, Word, WORD_BITS};

impl BitSet {
    /// Smallest element `>= pos`
    pub fn next_set_bit_at_or_after(&self, pos: u64) -> Option<u64> {
        if pos >= self.size_of_universe() {
            return None;
        }

        let words = self.words();
        let mut word_idx = (pos / WORD_BITS) as usize;
        let mut current = words[word_idx] & word::mask_from(pos % WORD_BITS);
        loop {
            if current != 0 {
                return Some(word_idx as u64 * WORD_BITS + current.trailing_zeros() as u64);
            }
            word_idx += 1;
            current = *words.get(word_idx)?;
        }
    }

    /// Smallest element `> pos`
    pub fn next_set_bit_after(&self, pos: u64) -> Option<u64> {
        self.next_set_bit_at_or_after(pos.checked_add(1)?)
    }

    /// Largest element `<= pos`
    ///
    /// Positions past the end of the universe scan from its last element.
    pub fn prev_set_bit_at_or_before(&self, pos: u64) -> Option<u64> {
        let last = self.size_of_universe().checked_sub(1)?;
        let pos = pos.min(last);

        let words = self.words();
        let mut word_idx = (pos / WORD_BITS) as usize;
        let mut current = words[word_idx] & word::mask_through(pos % WORD_BITS);
        loop {
            if current != 0 {
                let bit = WORD_BITS - 1 - current.leading_zeros() as u64;
                return Some(word_idx as u64 * WORD_BITS + bit);
            }
            word_idx = word_idx.checked_sub(1)?;
            current = words[word_idx];
        }
    }

    /// Largest element `< pos`
    pub fn prev_set_bit_before(&self, pos: u64) -> Option<u64> {
        self.prev_set_bit_at_or_before(pos.checked_sub(1)?)
    }

    /// Iterate over the elements in ascending order
    pub fn iter(&self) -> Ones<'_> {
        Ones::new(self.words())
    }
}

/// Ascending iterator over the elements of a [`BitSet`]
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [Word],
    word_idx: usize,
    current: Word,
}

impl<'a> Ones<'a> {
    fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            word_idx: 0,
            current: words.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.current == 0 {
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }
        let bit = self.current.trailing_zeros() as u64;
        // Drop the lowest set bit.
        self.current &= self.current - 1;
        Some(self.word_idx as u64 * WORD_BITS + bit)
    }
}

impl FusedIterator for Ones<'_> {}

impl<'a> IntoIterator for &'a BitSet {
    type Item = u64;
    type IntoIter = Ones<'a>;

    fn into_iter(self) -> Ones<'a> {
        self.iter()
    }
}
