use super::{packing, INITIAL_CODES};
use crate::bits::Word;
use log::trace;
use rustc_hash::FxHashMap;

/// Compress one block into packed LZW codes
///
/// An empty block produces no words at all.
pub fn encode(block: &[u8]) -> Vec<Word> {
    let codes = encode_codes(block);
    if codes.is_empty() {
        return Vec::new();
    }

    let packed = packing::pack(&codes);
    trace!("lzw: {} bytes -> {} codes -> {} words", block.len(), codes.len(), packed.len());
    packed
}

/// Run the dictionary scan and return the raw codes
///
/// A dictionary string is keyed by the code of its prefix plus its last
/// byte, which identifies it as uniquely as the full string.
pub fn encode_codes(block: &[u8]) -> Vec<Word> {
    let mut codes = Vec::new();
    let Some((&first, rest)) = block.split_first() else {
        return codes;
    };

    let mut dictionary: FxHashMap<(Word, u8), Word> = FxHashMap::default();
    let mut next_code = INITIAL_CODES;
    let mut current = Word::from(first);

    for &byte in rest {
        match dictionary.get(&(current, byte)) {
            Some(&code) => current = code,
            None => {
                codes.push(current);
                dictionary.insert((current, byte), next_code);
                next_code += 1;
                current = Word::from(byte);
            }
        }
    }
    codes.push(current);

    codes
}
