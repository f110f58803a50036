//! External representations of a bitset
//!
//! - [`text`]: one `'0'`/`'1'` character per element, element 0 first
//! - [`bytes`]: little-endian universe size followed by little-endian words
//!
//! Decoders validate the word count and canonical padding, so a decoded set
//! upholds the same invariants as one built through the API.

pub mod bytes;
pub mod text;

pub use bytes::HEADER_SIZE;

#[cfg(feature = "serde")]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use crate::{BitSet, BitSetError, Word};

/// Unvalidated serde form of a bitset
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub(crate) struct RawBitSet {
    universe_size: u64,
    words: Vec<Word>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBitSet> for BitSet {
    type Error = BitSetError;

    fn try_from(raw: RawBitSet) -> Result<Self, Self::Error> {
        BitSet::from_parts(raw.universe_size, raw.words)
    }
}
