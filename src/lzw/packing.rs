//! Compaction of LZW codes into shared words.
//!
//! Codes are emitted as full words but rarely need more than a few bits. The
//! block's largest code picks how many codes share a word (the stride), and
//! the result is stored as `[stride, element_count, packed..]`.

use crate::bits::{Word, WORD_BITS};
use crate::error::{Error, Result};

/// Codes per word that leaves the top bit of every slot unused for `max`
pub fn stride_for(max: Word) -> usize {
    if max < i8::MAX as Word {
        8
    } else if max < i16::MAX as Word {
        4
    } else if max < i32::MAX as Word {
        2
    } else {
        1
    }
}

/// Pack `codes`, most significant slot first
pub fn pack(codes: &[Word]) -> Vec<Word> {
    let max = codes.iter().copied().max().unwrap_or(0);
    let stride = stride_for(max);
    let slot_bits = WORD_BITS / stride;

    let mut words = Vec::with_capacity(2 + (codes.len() + stride - 1) / stride);
    words.push(stride as Word);
    words.push(codes.len() as Word);

    for chunk in codes.chunks(stride) {
        let mut word: Word = 0;
        for (slot, &code) in chunk.iter().enumerate() {
            word |= code << ((stride - 1 - slot) * slot_bits);
        }
        words.push(word);
    }

    words
}

/// Inverse of [`pack`]
///
/// Slots are extracted with an arithmetic shift, so a slot whose top bit is
/// set comes back sign-extended. [`pack`] never sets that bit.
pub fn unpack(words: &[Word]) -> Result<Vec<Word>> {
    let [stride, count, packed @ ..] = words else {
        return Err(Error::TruncatedPackedHeader);
    };

    let stride = match *stride {
        1 | 2 | 4 | 8 => *stride as usize,
        other => return Err(Error::InvalidStride(other)),
    };
    let count = usize::try_from(*count).unwrap_or(usize::MAX);
    let needed = count / stride + usize::from(count % stride != 0);
    if packed.len() < needed {
        return Err(Error::TruncatedPackedWords { expected: needed, found: packed.len() });
    }

    let slot_bits = WORD_BITS / stride;
    let mut codes = Vec::with_capacity(count);
    for &word in &packed[..needed] {
        for slot in 0..stride {
            if codes.len() == count {
                break;
            }
            let value = ((word << (slot * slot_bits)) as i64) >> (WORD_BITS - slot_bits);
            codes.push(value as Word);
        }
    }

    Ok(codes)
}
