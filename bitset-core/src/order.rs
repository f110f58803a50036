//! Equality and the subset partial order
//!
//! Bitsets over the same universe form a lattice under inclusion. Two sets
//! may be incomparable, so the ordering is exposed as [`PartialOrd`] rather
//! than [`Ord`]. The explicit predicates report mismatched universes as
//! [`BitSetError::IncompatibleUniverse`]; `partial_cmp` answers `None`.

use core::cmp::Ordering;

use crate::bitset::BitSet;
use crate::error::{BitSetError, Result};

impl BitSet {
    /// Identical membership over the same universe
    pub fn equal(&self, other: &BitSet) -> Result<bool> {
        BitSetError::check_universe(self.size_of_universe(), other.size_of_universe())?;
        Ok(self.words() == other.words())
    }

    /// Negation of [`BitSet::equal`]
    pub fn not_equal(&self, other: &BitSet) -> Result<bool> {
        self.equal(other).map(|eq| !eq)
    }

    /// Every element of `self` is in `other`
    pub fn is_subset(&self, other: &BitSet) -> Result<bool> {
        BitSetError::check_universe(self.size_of_universe(), other.size_of_universe())?;
        Ok(self
            .words()
            .iter()
            .zip(other.words())
            .all(|(&a, &b)| a & !b == 0))
    }

    /// Subset of `other` and not equal to it
    pub fn is_proper_subset(&self, other: &BitSet) -> Result<bool> {
        Ok(self.is_subset(other)? && self.words() != other.words())
    }

    /// Every element of `other` is in `self`
    pub fn is_superset(&self, other: &BitSet) -> Result<bool> {
        other.is_subset(self)
    }

    /// Superset of `other` and not equal to it
    pub fn is_proper_superset(&self, other: &BitSet) -> Result<bool> {
        other.is_proper_subset(self)
    }
}

impl PartialOrd for BitSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let subset = self.is_subset(other).ok()?;
        let superset = other.is_subset(self).ok()?;
        match (subset, superset) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
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
    fn test_reflexive() {
        let a = set_of(8, &[1, 6]);
        assert_eq!(a.equal(&a), Ok(true));
        assert_eq!(a.is_subset(&a), Ok(true));
        assert_eq!(a.is_proper_subset(&a), Ok(false));
        assert_eq!(a.is_superset(&a), Ok(true));
        assert_eq!(a.is_proper_superset(&a), Ok(false));
    }

    #[test]
    fn test_proper_relations() {
        let small = set_of(100, &[3, 70]);
        let large = set_of(100, &[3, 50, 70]);

        assert_eq!(small.is_subset(&large), Ok(true));
        assert_eq!(small.is_proper_subset(&large), Ok(true));
        assert_eq!(large.is_superset(&small), Ok(true));
        assert_eq!(large.is_proper_superset(&small), Ok(true));
        assert_eq!(large.is_subset(&small), Ok(false));
        assert_eq!(small.not_equal(&large), Ok(true));
    }

    #[test]
    fn test_empty_and_full_bound_the_lattice() {
        let empty = BitSet::empty(9).unwrap();
        let full = BitSet::full(9).unwrap();
        let some = set_of(9, &[4]);

        assert_eq!(empty.is_subset(&some), Ok(true));
        assert_eq!(some.is_subset(&full), Ok(true));
        assert!(empty < some && some < full);
    }

    #[test]
    fn test_partial_cmp() {
        let a = set_of(8, &[0, 2]);
        let b = set_of(8, &[0, 2, 4]);
        let c = set_of(8, &[1]);

        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(b.partial_cmp(&a), Some(Ordering::Greater));
        assert_eq!(a.partial_cmp(&a.clone()), Some(Ordering::Equal));
        assert_eq!(a.partial_cmp(&c), None);
        assert!(!(a < c) && !(a > c) && a != c);
    }

    #[test]
    fn test_incompatible_universe() {
        let a = set_of(8, &[]);
        let b = set_of(16, &[]);
        let expected = Err(BitSetError::IncompatibleUniverse { left: 8, right: 16 });

        assert_eq!(a.equal(&b), expected);
        assert_eq!(a.is_subset(&b), expected);
        // Superset tests are answered from the other side.
        assert_eq!(
            a.is_proper_superset(&b),
            Err(BitSetError::IncompatibleUniverse { left: 16, right: 8 })
        );
        assert_eq!(a.partial_cmp(&b), None);
        assert_ne!(a, b);
    }
}
