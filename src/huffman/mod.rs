pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod queue;
pub mod tree;

pub use frequency::{FrequencyEntry, FrequencyTable};
pub use queue::PriorityQueue;
pub use tree::{CodeTable, HuffmanTree, Node};

use crate::bits::Word;
use crate::error::Result;
use crate::BlockCodec;

/// Static Huffman coding with the frequency table stored ahead of each block
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanCodec;

impl BlockCodec for HuffmanCodec {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn archivate(&self, block: &[u8]) -> Vec<Word> {
        encoder::encode(block)
    }

    fn dearchivate(&self, words: &[Word]) -> Result<Vec<u8>> {
        decoder::decode(words)
    }
}
