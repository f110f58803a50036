//! Set algebra over bitsets sharing a universe
//!
//! Every binary operation exists in two forms. The `*_in_place` form mutates
//! the receiver and leaves the argument untouched; the functional form clones
//! the receiver and applies the in-place form to the copy, so both always
//! agree. Universes are checked before any word is touched.
//!
//! Word-wise OR, AND, AND-NOT and XOR of two canonically padded operands are
//! canonically padded, so only complement needs to re-clear padding.

use crate::bitset::BitSet;
use crate::error::{BitSetError, Result};
use crate::word::Word;

impl BitSet {
    /// Combine `other` into `self` word by word
    fn zip_words_in_place(
        &mut self,
        other: &BitSet,
        op: impl Fn(Word, Word) -> Word,
    ) -> Result<()> {
        BitSetError::check_universe(self.size_of_universe(), other.size_of_universe())?;
        for (lhs, &rhs) in self.words_mut().iter_mut().zip(other.words()) {
            *lhs = op(*lhs, rhs);
        }
        Ok(())
    }

    /// Functional wrapper around an in-place operation
    fn derive_with(
        &self,
        other: &BitSet,
        in_place: fn(&mut BitSet, &BitSet) -> Result<()>,
    ) -> Result<BitSet> {
        BitSetError::check_universe(self.size_of_universe(), other.size_of_universe())?;
        let mut result = self.try_clone()?;
        in_place(&mut result, other)?;
        Ok(result)
    }

    /// `self = self ∪ other`
    pub fn union_with_in_place(&mut self, other: &BitSet) -> Result<()> {
        self.zip_words_in_place(other, |a, b| a | b)
    }

    /// `self = self ∩ other`
    pub fn intersect_with_in_place(&mut self, other: &BitSet) -> Result<()> {
        self.zip_words_in_place(other, |a, b| a & b)
    }

    /// `self = self \ other`
    pub fn difference_with_in_place(&mut self, other: &BitSet) -> Result<()> {
        self.zip_words_in_place(other, |a, b| a & !b)
    }

    /// `self = self △ other`
    pub fn symmetric_difference_with_in_place(&mut self, other: &BitSet) -> Result<()> {
        self.zip_words_in_place(other, |a, b| a ^ b)
    }

    /// Complement within the universe
    pub fn negate_in_place(&mut self) {
        self.flip_all();
    }

    /// New set holding `self ∪ other`
    pub fn union_with(&self, other: &BitSet) -> Result<BitSet> {
        self.derive_with(other, BitSet::union_with_in_place)
    }

    /// New set holding `self ∩ other`
    pub fn intersection_with(&self, other: &BitSet) -> Result<BitSet> {
        self.derive_with(other, BitSet::intersect_with_in_place)
    }

    /// New set holding `self \ other`
    pub fn difference_with(&self, other: &BitSet) -> Result<BitSet> {
        self.derive_with(other, BitSet::difference_with_in_place)
    }

    /// New set holding `self △ other`
    pub fn symmetric_difference_with(&self, other: &BitSet) -> Result<BitSet> {
        self.derive_with(other, BitSet::symmetric_difference_with_in_place)
    }

    /// New set holding the complement of `self`
    pub fn negate(&self) -> Result<BitSet> {
        let mut result = self.try_clone()?;
        result.negate_in_place();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(universe_size: u64, elements: &[u64]) -> BitSet {
        let mut bits = BitSet::empty(universe_size).unwrap();
        for &e in elements {
            bits.set_bit(e).unwrap();
        }
        bits
    }

    #[test]
    fn test_union_and_intersection() {
        let a = set_of(8, &[0, 2, 4]);
        let b = set_of(8, &[1, 2, 3]);

        let union = a.union_with(&b).unwrap();
        assert_eq!(union.length(), 5);
        assert_eq!(union, set_of(8, &[0, 1, 2, 3, 4]));

        let intersection = a.intersection_with(&b).unwrap();
        assert_eq!(intersection.length(), 1);
        assert_eq!(intersection, set_of(8, &[2]));
    }

    #[test]
    fn test_disjoint_intersection_is_empty() {
        let a = set_of(8, &[0, 2, 4]);
        let b = set_of(8, &[1, 3, 5]);
        assert!(a.intersection_with(&b).unwrap().is_empty());
    }

    #[test]
    fn test_difference_and_symmetric_difference() {
        let a = set_of(70, &[0, 2, 4, 66]);
        let b = set_of(70, &[2, 3, 66, 69]);

        assert_eq!(a.difference_with(&b).unwrap(), set_of(70, &[0, 4]));
        assert_eq!(
            a.symmetric_difference_with(&b).unwrap(),
            set_of(70, &[0, 3, 4, 69])
        );
    }

    #[test]
    fn test_functional_ops_leave_operands_untouched() {
        let a = set_of(8, &[0, 2, 4]);
        let b = set_of(8, &[1, 2, 3]);
        let _ = a.union_with(&b).unwrap();
        let _ = a.negate().unwrap();

        assert_eq!(a, set_of(8, &[0, 2, 4]));
        assert_eq!(b, set_of(8, &[1, 2, 3]));
    }

    #[test]
    fn test_in_place_ops() {
        let mut a = set_of(8, &[0, 2, 4]);
        let b = set_of(8, &[1, 2, 3]);

        a.union_with_in_place(&b).unwrap();
        assert_eq!(a, set_of(8, &[0, 1, 2, 3, 4]));

        a.difference_with_in_place(&b).unwrap();
        assert_eq!(a, set_of(8, &[0, 4]));

        a.symmetric_difference_with_in_place(&b).unwrap();
        assert_eq!(a, set_of(8, &[0, 1, 2, 3, 4]));

        a.intersect_with_in_place(&b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_negate_respects_padding() {
        let a = set_of(5, &[1, 3]);
        let complement = a.negate().unwrap();
        assert_eq!(complement, set_of(5, &[0, 2, 4]));
        assert_eq!(complement.words(), &[0b1_0101]);
        assert_eq!(complement.negate().unwrap(), a);
    }

    #[test]
    fn test_incompatible_universe() {
        let mut a = set_of(8, &[1]);
        let b = set_of(16, &[1]);
        let expected = BitSetError::IncompatibleUniverse { left: 8, right: 16 };

        assert_eq!(a.union_with(&b), Err(expected));
        assert_eq!(a.intersection_with(&b), Err(expected));
        assert_eq!(a.union_with_in_place(&b), Err(expected));
        assert_eq!(a.difference_with_in_place(&b), Err(expected));
        assert_eq!(a, set_of(8, &[1]));
    }
}
