use super::frequency::FrequencyTable;
use super::tree::{CodeTable, HuffmanTree};
use crate::bits::{BitBuffer, Word};
use log::trace;

/// Compress one block
///
/// Layout: packed frequency table, then the bit count, then the packed bits.
pub fn encode(block: &[u8]) -> Vec<Word> {
    trace!("huffman: counting {} bytes", block.len());
    let table = FrequencyTable::from_block(block);

    trace!("huffman: building tree for {} symbols", table.len());
    let tree = HuffmanTree::build(&table);
    let codes = tree.code_table();

    let bits = encode_bits(block, &codes);
    trace!("huffman: {} bytes -> {} bits", block.len(), bits.len());

    let mut words = table.pack();
    words.reserve(bits.words().len() + 1);
    words.push(bits.len() as Word);
    words.extend_from_slice(bits.words());
    words
}

/// Concatenate the code of every byte of `block`
pub fn encode_bits(block: &[u8], codes: &CodeTable) -> BitBuffer {
    let mut bits = BitBuffer::new();
    for &byte in block {
        if let Some(code) = codes.get(byte) {
            bits.append(code);
        }
    }
    bits
}
