//! Error types for bitset operations

/// Errors that can occur during bitset operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitSetError {
    /// Element index outside `[0, universe_size)`
    IndexOutOfRange { index: u64, universe_size: u64 },
    /// Binary operation on bitsets over different universes
    IncompatibleUniverse { left: u64, right: u64 },
    /// Storage for a new bitset could not be obtained
    AllocationFailure { words: u64 },
    /// Character other than '0' or '1' in a rendered bitset
    InvalidDigit { position: usize },
    /// Encoded bitset is truncated, oversized, or has padding bits set
    InvalidEncoding,
}

impl core::fmt::Display for BitSetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitSetError::IndexOutOfRange {
                index,
                universe_size,
            } => write!(
                f,
                "Bit index {index} out of range for universe of size {universe_size}"
            ),
            BitSetError::IncompatibleUniverse { left, right } => write!(
                f,
                "Incompatible universes: {left} and {right} elements"
            ),
            BitSetError::AllocationFailure { words } => {
                write!(f, "Failed to allocate storage for {words} words")
            }
            BitSetError::InvalidDigit { position } => {
                write!(f, "Invalid bit character at position {position}")
            }
            BitSetError::InvalidEncoding => write!(f, "Invalid bitset encoding"),
        }
    }
}

impl core::error::Error for BitSetError {}

impl BitSetError {
    /// Check that two universes match
    pub(crate) const fn check_universe(left: u64, right: u64) -> Result<()> {
        if left != right {
            return Err(BitSetError::IncompatibleUniverse { left, right });
        }
        Ok(())
    }
}

/// Result type for bitset operations
pub type Result<T> = core::result::Result<T, BitSetError>;
