use super::{Word, WORD_BITS};
use crate::error::{Error, Result};
use std::fmt;

/// Growable bit sequence packed MSB-first into words
///
/// Bit 0 is the most significant bit of `words[0]`. Every writer leaves the
/// bits past `len` in the last word at zero, so the derived equality compares
/// content only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitBuffer {
    /// Packed bits, `ceil(len / WORD_BITS)` words
    words: Vec<Word>,
    /// Number of valid bits
    len: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding exactly one bit
    pub fn single_bit(bit: bool) -> Self {
        Self { words: vec![Word::from(bit) << (WORD_BITS - 1)], len: 1 }
    }

    /// Rebuild a buffer from its packed words and exact bit length
    ///
    /// The word count must match the bit length exactly. Stray bits past the
    /// end are cleared.
    pub fn from_words(mut words: Vec<Word>, bit_len: u64) -> Result<Self> {
        let len = usize::try_from(bit_len)
            .map_err(|_| Error::TruncatedBitStream { bits: bit_len, words: words.len() })?;
        if words.len() != words_needed(len) {
            return Err(Error::TruncatedBitStream { bits: bit_len, words: words.len() });
        }

        let tail = len % WORD_BITS;
        if tail != 0 {
            if let Some(last) = words.last_mut() {
                *last &= high_mask(tail);
            }
        }

        Ok(Self { words, len })
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed storage, MSB-first
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Append all bits of `other` after the current ones
    pub fn append(&mut self, other: &BitBuffer) {
        self.words.reserve(words_needed(self.len + other.len) - self.words.len());

        let mut remaining = other.len;
        for &word in &other.words {
            let bits = remaining.min(WORD_BITS);
            self.push_word(word, bits);
            remaining -= bits;
        }
    }

    /// Append a single bit
    pub fn push(&mut self, bit: bool) {
        self.push_word(Word::from(bit) << (WORD_BITS - 1), 1);
    }

    /// Append the top `bits` bits of `word`
    fn push_word(&mut self, word: Word, bits: usize) {
        debug_assert!(bits <= WORD_BITS);

        if bits == 0 {
            return;
        }

        let word = word & high_mask(bits);
        let offset = self.len % WORD_BITS;

        if offset == 0 {
            self.words.push(word);
        } else {
            if let Some(last) = self.words.last_mut() {
                *last |= word >> offset;
            }
            if bits > WORD_BITS - offset {
                self.words.push(word << (WORD_BITS - offset));
            }
        }

        self.len += bits;
    }

    /// Bit at `index`, or `None` past the end
    pub fn bit_at(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let word = self.words.get(index / WORD_BITS)?;
        let shift = WORD_BITS - 1 - index % WORD_BITS;
        Some((word >> shift) & 1 == 1)
    }

    /// Iterate over the bits in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len)
            .map(move |i| (self.words[i / WORD_BITS] >> (WORD_BITS - 1 - i % WORD_BITS)) & 1 == 1)
    }

    /// Reset to empty, keeping the allocation
    pub fn clear(&mut self) {
        self.words.clear();
        self.len = 0;
    }

    /// Bits as a string of '0' and '1'
    pub fn to_binary_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_binary_string())
    }
}

/// Mask selecting the top `bits` bits of a word (1-64)
fn high_mask(bits: usize) -> Word {
    debug_assert!((1..=WORD_BITS).contains(&bits));
    !0 << (WORD_BITS - bits)
}

fn words_needed(bits: usize) -> usize {
    bits / WORD_BITS + usize::from(bits % WORD_BITS != 0)
}
