//! Little-endian byte encoding
//!
//! Layout: `universe_size` as a `u64`, then each storage word as a `u64`,
//! all little-endian. Padding bits of the final word must be zero.

use alloc::vec::Vec;

use crate::bitset::{allocate_words, BitSet};
use crate::error::{BitSetError, Result};
use crate::word::{self, Word};

/// Size of the encoded universe header in bytes
pub const HEADER_SIZE: usize = 8;

const WORD_SIZE: usize = core::mem::size_of::<Word>();

impl BitSet {
    /// Number of bytes produced by [`BitSet::to_bytes`]
    pub fn encoded_size(&self) -> usize {
        HEADER_SIZE + self.words().len() * WORD_SIZE
    }

    /// Encode universe size and storage words
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.encoded_size());
        buffer.extend_from_slice(&self.size_of_universe().to_le_bytes());
        for word in self.words() {
            buffer.extend_from_slice(&word.to_le_bytes());
        }
        buffer
    }

    /// Decode the output of [`BitSet::to_bytes`]
    ///
    /// The payload length is checked against the header before any storage
    /// is allocated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(BitSetError::InvalidEncoding);
        }
        let (header, body) = bytes.split_at(HEADER_SIZE);
        let header: [u8; HEADER_SIZE] = header
            .try_into()
            .map_err(|_| BitSetError::InvalidEncoding)?;
        let universe_size = u64::from_le_bytes(header);

        let expected = word::words_for_bits(universe_size)
            .and_then(|words| words.checked_mul(WORD_SIZE))
            .ok_or(BitSetError::InvalidEncoding)?;
        if body.len() != expected {
            return Err(BitSetError::InvalidEncoding);
        }

        let mut words = allocate_words(universe_size, 0)?;
        for (word, chunk) in words.iter_mut().zip(body.chunks_exact(WORD_SIZE)) {
            let chunk: [u8; WORD_SIZE] = chunk
                .try_into()
                .map_err(|_| BitSetError::InvalidEncoding)?;
            *word = Word::from_le_bytes(chunk);
        }

        BitSet::from_parts(universe_size, words)
    }
}
