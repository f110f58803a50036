//! Textual rendering and parsing
//!
//! A bitset over `N` elements renders as exactly `N` characters. Character
//! `i` is `'1'` when element `i` is set and `'0'` otherwise, so element 0 is
//! leftmost: `{3, 5}` over 8 elements is `"00010100"`.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::bitset::BitSet;
use crate::error::{BitSetError, Result};
use crate::word::WORD_BITS;

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        let mut remaining = self.size_of_universe();
        for &word in self.words() {
            let width = remaining.min(WORD_BITS);
            for bit in 0..width {
                rendered.push(if (word >> bit) & 1 == 1 { '1' } else { '0' });
            }
            remaining -= width;
        }
        // Honors width, fill and alignment flags.
        f.pad(&rendered)
    }
}

impl FromStr for BitSet {
    type Err = BitSetError;

    /// Parse the rendered form; the universe size is the string length
    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitSet::empty(s.len() as u64)?;
        for (position, byte) in s.bytes().enumerate() {
            match byte {
                b'1' => bits.set_bit(position as u64)?,
                b'0' => {}
                _ => return Err(BitSetError::InvalidDigit { position }),
            }
        }
        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn test_render_element_zero_first() {
        let bits = BitSet::from_elements(8, [3, 5]).unwrap();
        assert_eq!(bits.to_string(), "00010100");
    }

    #[test]
    fn test_render_across_words() {
        let bits = BitSet::from_elements(66, [0, 64, 65]).unwrap();
        let rendered = bits.to_string();

        assert_eq!(rendered.len(), 66);
        assert!(rendered.starts_with("10"));
        assert!(rendered.ends_with("011"));
        assert_eq!(rendered.matches('1').count(), 3);
    }

    #[test]
    fn test_render_empty_universe() {
        assert_eq!(BitSet::empty(0).unwrap().to_string(), "");
    }

    #[test]
    fn test_parse() {
        let bits: BitSet = "00010100".parse().unwrap();
        assert_eq!(bits, BitSet::from_elements(8, [3, 5]).unwrap());
        assert_eq!(bits.to_string(), "00010100");
    }

    #[test]
    fn test_parse_rejects_other_characters() {
        assert_eq!(
            "01x0".parse::<BitSet>(),
            Err(BitSetError::InvalidDigit { position: 2 })
        );
        assert_eq!(
            "0102".parse::<BitSet>(),
            Err(BitSetError::InvalidDigit { position: 3 })
        );
    }

    #[test]
    fn test_render_honors_padding() {
        let bits = BitSet::from_elements(4, [1]).unwrap();
        assert_eq!(format!("{bits:>6}"), "  0100");
        assert_eq!(format!("{bits:*<6}"), "0100**");
    }
}
