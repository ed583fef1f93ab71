use crate::bits::Word;
use crate::error::{Error, Result};

/// Bits holding the count in a packed frequency word
const COUNT_BITS: u32 = 56;

/// Largest count that fits beside the byte
pub const MAX_COUNT: u64 = (1 << (COUNT_BITS - 1)) - 1;

/// Occurrences of one byte value in a block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub byte: u8,
    pub count: u64,
}

/// Byte frequencies of a block, one entry per distinct byte
///
/// Entries are ordered by the byte read as a signed value (0x80..=0xFF first,
/// then 0x00..=0x7F). Tree construction sees them in this order, so it decides
/// which of two equally frequent bytes is merged first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Count every byte of `block`
    pub fn from_block(block: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in block {
            counts[byte as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    fn from_counts(counts: &[u64; 256]) -> Self {
        let entries = (i8::MIN..=i8::MAX)
            .map(|signed| signed as u8)
            .filter(|&byte| counts[byte as usize] > 0)
            .map(|byte| FrequencyEntry { byte, count: counts[byte as usize] })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of distinct bytes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the block length
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Serialize as `[n, entry_1, .., entry_n]`
    ///
    /// Each entry word carries the byte in its top 8 bits and the count in the
    /// low 56 bits.
    pub fn pack(&self) -> Vec<Word> {
        let mut words = Vec::with_capacity(self.entries.len() + 1);
        words.push(self.entries.len() as Word);
        for entry in &self.entries {
            debug_assert!(entry.count <= MAX_COUNT);
            words.push((Word::from(entry.byte) << COUNT_BITS) | entry.count);
        }
        words
    }

    /// Parse a packed table from the front of `words`
    ///
    /// Returns the table and the number of words consumed.
    pub fn unpack(words: &[Word]) -> Result<(Self, usize)> {
        let (&declared, rest) = words.split_first().ok_or(Error::EmptyStream)?;
        let n = usize::try_from(declared)
            .ok()
            .filter(|&n| n <= rest.len())
            .ok_or(Error::TruncatedFrequencyTable { declared, available: rest.len() })?;

        let mut counts = [0u64; 256];
        for &word in &rest[..n] {
            // Both fields are read back sign-extended
            let byte = ((word as i64) >> COUNT_BITS) as i8 as u8;
            let count = ((word << 8) as i64) >> 8;
            if count < 1 {
                return Err(Error::InvalidFrequencyCount { byte, count });
            }
            if counts[byte as usize] != 0 {
                return Err(Error::DuplicateFrequencyEntry(byte));
            }
            counts[byte as usize] = count as u64;
        }

        Ok((Self::from_counts(&counts), n + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_block() {
        let table = FrequencyTable::from_block(b"AABBBCCCDDDDD");
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 13);
        assert_eq!(
            table.entries(),
            &[
                FrequencyEntry { byte: b'A', count: 2 },
                FrequencyEntry { byte: b'B', count: 3 },
                FrequencyEntry { byte: b'C', count: 3 },
                FrequencyEntry { byte: b'D', count: 5 },
            ]
        );
    }

    #[test]
    fn test_signed_byte_order() {
        let table = FrequencyTable::from_block(&[0x7F, 0x00, 0xFF, 0x80]);
        let bytes: Vec<u8> = table.entries().iter().map(|e| e.byte).collect();
        assert_eq!(bytes, vec![0x80, 0xFF, 0x00, 0x7F]);
    }

    #[test]
    fn test_empty_block() {
        let table = FrequencyTable::from_block(&[]);
        assert!(table.is_empty());
        assert_eq!(table.pack(), vec![0]);
    }

    #[test]
    fn test_entry_word_layout() {
        let table = FrequencyTable::from_block(&vec![100u8; 555_555]);
        let words = table.pack();
        assert_eq!(words, vec![1, 7_205_759_403_793_349_155]);
    }

    #[test]
    fn test_pack_unpack_high_bytes() {
        let mut block = vec![0xFFu8; 3];
        block.extend_from_slice(&[0x80, 0x01, 0x01]);
        let table = FrequencyTable::from_block(&block);

        let (unpacked, consumed) = FrequencyTable::unpack(&table.pack()).unwrap();
        assert_eq!(unpacked, table);
        assert_eq!(consumed, 4);
    }

    #[test]
    fn test_unpack_ignores_entry_order() {
        let table = FrequencyTable::from_block(b"#####$$..");
        let mut words = table.pack();
        words[1..].reverse();

        let (unpacked, _) = FrequencyTable::unpack(&words).unwrap();
        assert_eq!(unpacked, table);
    }

    #[test]
    fn test_unpack_leaves_trailing_words() {
        let mut words = FrequencyTable::from_block(b"ab").pack();
        words.extend_from_slice(&[42, 43]);
        let (_, consumed) = FrequencyTable::unpack(&words).unwrap();
        assert_eq!(&words[consumed..], &[42, 43]);
    }

    #[test]
    fn test_unpack_empty() {
        assert!(matches!(FrequencyTable::unpack(&[]), Err(Error::EmptyStream)));
    }

    #[test]
    fn test_unpack_truncated() {
        let words = FrequencyTable::from_block(b"abc").pack();
        assert!(matches!(
            FrequencyTable::unpack(&words[..3]),
            Err(Error::TruncatedFrequencyTable { declared: 3, available: 2 })
        ));
        assert!(FrequencyTable::unpack(&[u64::MAX]).is_err());
    }

    #[test]
    fn test_unpack_rejects_zero_count() {
        let words = vec![1, Word::from(b'a') << 56];
        assert!(matches!(
            FrequencyTable::unpack(&words),
            Err(Error::InvalidFrequencyCount { byte: b'a', count: 0 })
        ));
    }

    #[test]
    fn test_unpack_rejects_duplicates() {
        let entry = (Word::from(b'a') << 56) | 2;
        assert!(matches!(
            FrequencyTable::unpack(&[2, entry, entry]),
            Err(Error::DuplicateFrequencyEntry(b'a'))
        ));
    }
}
