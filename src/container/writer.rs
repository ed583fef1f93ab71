use super::BLOCK_HEADER_SIZE;
use crate::bits::{Word, WORD_BYTES};
use crate::error::Result;
use std::io::Write;

/// Writes length-prefixed blocks of words
///
/// Each block is one little-endian word holding the word count, followed by
/// that many little-endian words.
pub struct BlockWriter<W: Write> {
    writer: W,
    bytes_written: u64,
}

impl<W: Write> BlockWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, bytes_written: 0 }
    }

    /// Write one framed block
    pub fn write_block(&mut self, words: &[Word]) -> Result<()> {
        let mut bytes = Vec::with_capacity(BLOCK_HEADER_SIZE + words.len() * WORD_BYTES);
        bytes.extend_from_slice(&(words.len() as Word).to_le_bytes());
        for word in words {
            bytes.extend_from_slice(&word.to_le_bytes());
        }

        self.writer.write_all(&bytes)?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Total bytes written, headers included
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and finish writing
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
