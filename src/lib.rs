pub mod archiver;
pub mod bits;
pub mod container;
pub mod error;
pub mod huffman;
pub mod lzw;

pub use archiver::{compress_file, decompress_file, Archiver};
pub use bits::{BitBuffer, Word, WORD_BITS, WORD_BYTES};
pub use container::{BlockReader, BlockWriter, DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE};
pub use error::{Error, Result};
pub use huffman::HuffmanCodec;
pub use lzw::LzwCodec;

use std::fmt;
use std::str::FromStr;

/// Compression algorithm, chosen once per run
///
/// The container does not record which algorithm wrote it; decompression
/// must use the same one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Huffman,
    Lzw,
}

impl Algorithm {
    /// The codec applied to every block
    pub fn codec(&self) -> Box<dyn BlockCodec> {
        match self {
            Self::Huffman => Box::new(HuffmanCodec),
            Self::Lzw => Box::new(LzwCodec),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "h" | "huffman" => Ok(Self::Huffman),
            "l" | "lzw" => Ok(Self::Lzw),
            other => Err(format!("unknown algorithm '{}' (expected h or l)", other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codec().name())
    }
}

/// Configuration for compression and decompression
#[derive(Clone, Debug)]
pub struct ArchiveConfig {
    /// Uncompressed bytes per block (default: 1,000,000)
    pub block_size: usize,
    /// Codec applied to each block
    pub algorithm: Algorithm,
    /// Buffer size for I/O operations
    pub buffer_size: usize,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            algorithm: Algorithm::Huffman,
            buffer_size: 128 * 1024,
        }
    }
}

impl ArchiveConfig {
    /// Reject settings no pass can run with
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 || self.block_size > MAX_BLOCK_SIZE {
            return Err(Error::InvalidBlockSize(self.block_size));
        }
        Ok(())
    }
}

/// Statistics from a compress or decompress pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchiveStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub blocks: u64,
}

impl ArchiveStats {
    /// Space saved by compression, in percent of the input size
    ///
    /// Negative when the output grew. Zero for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        (self.input_bytes as f64 - self.output_bytes as f64) / self.input_bytes as f64 * 100.0
    }
}

/// A codec that turns one block of bytes into words and back
///
/// Implementations keep no state between blocks.
pub trait BlockCodec {
    /// Short name for diagnostics
    fn name(&self) -> &'static str;

    /// Compress a block
    fn archivate(&self, block: &[u8]) -> Vec<Word>;

    /// Decompress the words of one block
    fn dearchivate(&self, words: &[Word]) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("h".parse::<Algorithm>(), Ok(Algorithm::Huffman));
        assert_eq!("huffman".parse::<Algorithm>(), Ok(Algorithm::Huffman));
        assert_eq!("l".parse::<Algorithm>(), Ok(Algorithm::Lzw));
        assert!("x".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_algorithm_codec() {
        assert_eq!(Algorithm::Huffman.codec().name(), "huffman");
        assert_eq!(Algorithm::Lzw.codec().name(), "lzw");
        assert_eq!(Algorithm::Lzw.to_string(), "lzw");
    }

    #[test]
    fn test_codecs_round_trip() {
        let block = b"abracadabra abracadabra";
        for algorithm in [Algorithm::Huffman, Algorithm::Lzw] {
            let codec = algorithm.codec();
            assert_eq!(codec.dearchivate(&codec.archivate(block)).unwrap(), block);
        }
    }

    #[test]
    fn test_stats_ratio() {
        let stats = ArchiveStats { input_bytes: 200, output_bytes: 50, blocks: 1 };
        assert!((stats.ratio() - 75.0).abs() < 1e-9);
        assert_eq!(ArchiveStats::default().ratio(), 0.0);
    }

    #[test]
    fn test_default_config() {
        let config = ArchiveConfig::default();
        assert_eq!(config.block_size, 1_000_000);
        assert_eq!(config.algorithm, Algorithm::Huffman);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_block_size() {
        for block_size in [0, MAX_BLOCK_SIZE + 1] {
            let config = ArchiveConfig { block_size, ..Default::default() };
            let result = config.validate();
            assert!(matches!(result, Err(Error::InvalidBlockSize(n)) if n == block_size));
        }
        let config = ArchiveConfig { block_size: MAX_BLOCK_SIZE, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
