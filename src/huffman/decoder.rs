use super::frequency::FrequencyTable;
use super::tree::HuffmanTree;
use crate::bits::{BitBuffer, Word};
use crate::error::{Error, Result};
use log::trace;

/// Decompress one block produced by [`super::encoder::encode`]
pub fn decode(words: &[Word]) -> Result<Vec<u8>> {
    let (table, consumed) = FrequencyTable::unpack(words)?;
    trace!("huffman: unpacked table of {} symbols", table.len());

    let (&bit_len, packed) = words[consumed..]
        .split_first()
        .ok_or(Error::TruncatedBitStream { bits: 0, words: 0 })?;
    let bits = BitBuffer::from_words(packed.to_vec(), bit_len)?;

    let tree = HuffmanTree::build(&table);
    let output = tree.decode(&bits, table.total())?;
    trace!("huffman: {} bits -> {} bytes", bits.len(), output.len());
    Ok(output)
}
