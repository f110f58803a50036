//! Reusable bitset configuration
//!
//! Callers that build many sets over the same universe (one signature per
//! candidate expression, say) hold a [`BitSetFactory`] instead of threading
//! the universe size and fill value through every call site.

use crate::bitset::BitSet;
use crate::error::Result;

/// Configuration for creating bitsets over one universe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitSetFactory {
    /// Number of elements in each produced set
    pub universe_size: u64,
    /// Whether produced sets start full
    pub initial_value: bool,
}

impl BitSetFactory {
    /// Factory for empty sets over `universe_size` elements
    pub const fn new(universe_size: u64) -> Self {
        Self {
            universe_size,
            initial_value: false,
        }
    }

    /// Set the fill value of produced sets
    pub const fn with_initial_value(mut self, initial_value: bool) -> Self {
        self.initial_value = initial_value;
        self
    }

    /// Get the universe size
    pub const fn universe_size(&self) -> u64 {
        self.universe_size
    }

    /// Get the fill value
    pub const fn initial_value(&self) -> bool {
        self.initial_value
    }

    /// Create a fresh set
    pub fn make(&self) -> Result<BitSet> {
        BitSet::new(self.universe_size, self.initial_value)
    }

    /// Whether `bits` could have come from this factory's universe
    pub fn accepts(&self, bits: &BitSet) -> bool {
        bits.size_of_universe() == self.universe_size
    }
}
