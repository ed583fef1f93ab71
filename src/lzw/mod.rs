pub mod decoder;
pub mod encoder;
pub mod packing;

use crate::bits::Word;
use crate::error::Result;
use crate::BlockCodec;

/// Codes `0..256` stand for the single bytes; the first new entry gets 256
pub const INITIAL_CODES: Word = 256;

/// LZW with a per-block dictionary and packed code words
#[derive(Clone, Copy, Debug, Default)]
pub struct LzwCodec;

impl BlockCodec for LzwCodec {
    fn name(&self) -> &'static str {
        "lzw"
    }

    fn archivate(&self, block: &[u8]) -> Vec<Word> {
        encoder::encode(block)
    }

    fn dearchivate(&self, words: &[Word]) -> Result<Vec<u8>> {
        decoder::decode(words)
    }
}
