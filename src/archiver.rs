use crate::container::{BlockReader, BlockWriter};
use crate::error::Result;
use crate::{ArchiveConfig, ArchiveStats};
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Compresses and decompresses whole streams block by block
///
/// Blocks are independent: every block gets a fresh codec state, and only
/// the word-count framing links them.
pub struct Archiver {
    config: ArchiveConfig,
}

impl Archiver {
    pub fn new(config: ArchiveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Split `input` into blocks, compress each and write them framed
    ///
    /// Empty input produces empty output.
    pub fn compress<R: Read, W: Write>(&self, input: R, output: W) -> Result<ArchiveStats> {
        self.config.validate()?;
        let block_size = self.config.block_size;

        let codec = self.config.algorithm.codec();
        let mut reader = BufReader::with_capacity(self.config.buffer_size, input);
        let mut writer =
            BlockWriter::new(BufWriter::with_capacity(self.config.buffer_size, output));

        let mut stats = ArchiveStats::default();
        let mut block = Vec::new();

        loop {
            block.clear();
            let len = reader.by_ref().take(block_size as u64).read_to_end(&mut block)?;
            if len == 0 {
                break;
            }

            let words = codec.archivate(&block);
            writer.write_block(&words)?;
            debug!(
                "compress | block {}: {} bytes -> {} words ({})",
                stats.blocks,
                len,
                words.len(),
                codec.name()
            );

            stats.blocks += 1;
            stats.input_bytes += len as u64;

            // A short block means the input is exhausted
            if len < block_size {
                break;
            }
        }

        stats.output_bytes = writer.bytes_written();
        writer.finish()?;

        Ok(stats)
    }

    /// Read framed blocks from `input` and write the decompressed bytes
    ///
    /// A malformed block aborts the pass; bytes of earlier blocks have
    /// already been written.
    pub fn decompress<R: Read, W: Write>(&self, input: R, output: W) -> Result<ArchiveStats> {
        let codec = self.config.algorithm.codec();
        let mut reader =
            BlockReader::new(BufReader::with_capacity(self.config.buffer_size, input));
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, output);

        let mut stats = ArchiveStats::default();

        while let Some(words) = reader.next_block()? {
            let bytes = codec.dearchivate(&words)?;
            writer.write_all(&bytes)?;
            debug!(
                "decompress | block {}: {} words -> {} bytes ({})",
                stats.blocks,
                words.len(),
                bytes.len(),
                codec.name()
            );

            stats.blocks += 1;
            stats.output_bytes += bytes.len() as u64;
        }

        stats.input_bytes = reader.bytes_read();
        writer.flush()?;

        Ok(stats)
    }
}

/// Compress the file at `input` into a new file at `output`
pub fn compress_file(input: &Path, output: &Path, config: &ArchiveConfig) -> Result<ArchiveStats> {
    let source = File::open(input)?;
    let target = File::create(output)?;
    Archiver::new(config.clone()).compress(source, target)
}

/// Decompress the file at `input` into a new file at `output`
pub fn decompress_file(
    input: &Path,
    output: &Path,
    config: &ArchiveConfig,
) -> Result<ArchiveStats> {
    let source = File::open(input)?;
    let target = File::create(output)?;
    Archiver::new(config.clone()).decompress(source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, Error};
    use std::io::Cursor;

    fn archiver(algorithm: Algorithm, block_size: usize) -> Archiver {
        Archiver::new(ArchiveConfig { block_size, algorithm, ..Default::default() })
    }

    fn round_trip(archiver: &Archiver, data: &[u8]) -> ArchiveStats {
        let mut compressed = Vec::new();
        let stats = archiver.compress(Cursor::new(data), &mut compressed).unwrap();
        assert_eq!(stats.output_bytes, compressed.len() as u64);

        let mut restored = Vec::new();
        let back = archiver.decompress(Cursor::new(&compressed), &mut restored).unwrap();
        assert_eq!(restored, data);
        assert_eq!(back.blocks, stats.blocks);
        assert_eq!(back.input_bytes, compressed.len() as u64);
        stats
    }

    #[test]
    fn test_round_trip_both_algorithms() {
        let data = b"It was the best of times, it was the worst of times".repeat(50);
        for algorithm in [Algorithm::Huffman, Algorithm::Lzw] {
            let stats = round_trip(&archiver(algorithm, 100), &data);
            assert_eq!(stats.input_bytes, data.len() as u64);
            assert_eq!(stats.blocks, (data.len() as u64 + 99) / 100);
        }
    }

    #[test]
    fn test_empty_input() {
        for algorithm in [Algorithm::Huffman, Algorithm::Lzw] {
            let stats = round_trip(&archiver(algorithm, 16), &[]);
            assert_eq!(stats.blocks, 0);
            assert_eq!(stats.output_bytes, 0);
        }
    }

    #[test]
    fn test_exact_multiple_of_block_size() {
        let data = vec![7u8; 64];
        let stats = round_trip(&archiver(Algorithm::Huffman, 16), &data);
        assert_eq!(stats.blocks, 4);
    }

    #[test]
    fn test_zero_block_size() {
        let result = archiver(Algorithm::Lzw, 0).compress(Cursor::new(b"abc"), Vec::new());
        assert!(matches!(result, Err(Error::InvalidBlockSize(0))));
    }

    #[test]
    fn test_oversized_block_size() {
        let archiver = archiver(Algorithm::Huffman, crate::MAX_BLOCK_SIZE + 1);
        let result = archiver.compress(Cursor::new(b"abc"), Vec::new());
        assert!(matches!(result, Err(Error::InvalidBlockSize(_))));
    }

    #[test]
    fn test_corrupt_block_aborts() {
        let archiver = archiver(Algorithm::Lzw, 8);
        let mut compressed = Vec::new();
        archiver.compress(Cursor::new(b"0123456789abcdef"), &mut compressed).unwrap();

        // Second block's stride word
        let stride_offset = compressed.len() / 2 + 8;
        compressed[stride_offset] = 3;

        let result = archiver.decompress(Cursor::new(&compressed), Vec::new());
        assert!(matches!(result, Err(Error::InvalidStride(3))));
    }
}
