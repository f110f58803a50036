//! Structural hashing
//!
//! Equal bitsets share a universe and identical storage, including the
//! zeroed padding, so hashing the raw storage bytes is consistent with
//! equality. The value depends on native endianness and is not meant to be
//! persisted.

use crate::bitset::BitSet;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl BitSet {
    /// FNV-1a over the universe size and the storage words
    pub fn structural_hash(&self) -> u64 {
        let universe = self.size_of_universe().to_le_bytes();
        let storage: &[u8] = bytemuck::cast_slice(self.words());

        let mut hash = FNV_OFFSET_BASIS;
        for &byte in universe.iter().chain(storage) {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}
