use crate::bits::{Word, WORD_BYTES};
use crate::error::{Error, Result};
use std::io::{ErrorKind, Read};

/// Reads length-prefixed blocks written by [`super::BlockWriter`]
pub struct BlockReader<R: Read> {
    reader: R,
    /// Total bytes read (for statistics and error reporting)
    bytes_read: u64,
}

impl<R: Read> BlockReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, bytes_read: 0 }
    }

    /// Read the next block's words
    ///
    /// Returns `None` at a clean end of input. Input that ends inside a
    /// block is an error.
    pub fn next_block(&mut self) -> Result<Option<Vec<Word>>> {
        let Some(count) = self.read_count()? else {
            return Ok(None);
        };

        // Never trust the count for allocation; read what is actually there
        let byte_len = count.saturating_mul(WORD_BYTES as u64);
        let mut bytes = Vec::new();
        self.reader.by_ref().take(byte_len).read_to_end(&mut bytes)?;
        self.bytes_read += bytes.len() as u64;

        if (bytes.len() as u64) < byte_len {
            let found = bytes.len() / WORD_BYTES;
            return Err(Error::TruncatedBlock { expected: count, found });
        }

        let words = bytes
            .chunks_exact(WORD_BYTES)
            .map(|chunk| {
                let mut word = [0u8; WORD_BYTES];
                word.copy_from_slice(chunk);
                Word::from_le_bytes(word)
            })
            .collect();
        Ok(Some(words))
    }

    /// Read a block's word count, or `None` at end of input
    fn read_count(&mut self) -> Result<Option<Word>> {
        let mut buf = [0u8; WORD_BYTES];
        let mut filled = 0;

        while filled < WORD_BYTES {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    // Retry on interrupt
                }
                Err(e) => return Err(Error::Io(e)),
            }
        }
        self.bytes_read += filled as u64;

        match filled {
            0 => Ok(None),
            WORD_BYTES => Ok(Some(Word::from_le_bytes(buf))),
            _ => Err(Error::UnexpectedEof),
        }
    }

    /// Total bytes consumed so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl<R: Read> Iterator for BlockReader<R> {
    type Item = Result<Vec<Word>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::super::BlockWriter;
    use super::*;

    fn framed(blocks: &[&[Word]]) -> Vec<u8> {
        let mut writer = BlockWriter::new(Vec::new());
        for block in blocks {
            writer.write_block(block).unwrap();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn test_read_blocks() {
        let data = framed(&[&[1, 2, 3], &[], &[u64::MAX]]);
        let mut reader = BlockReader::new(data.as_slice());

        assert_eq!(reader.next_block().unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(reader.next_block().unwrap(), Some(vec![]));
        assert_eq!(reader.next_block().unwrap(), Some(vec![u64::MAX]));
        assert_eq!(reader.next_block().unwrap(), None);
        assert_eq!(reader.bytes_read(), data.len() as u64);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = BlockReader::new(&[][..]);
        assert_eq!(reader.next_block().unwrap(), None);
    }

    #[test]
    fn test_iterator() {
        let data = framed(&[&[7], &[8, 9]]);
        let blocks: Vec<Vec<Word>> =
            BlockReader::new(data.as_slice()).collect::<Result<_>>().unwrap();
        assert_eq!(blocks, vec![vec![7], vec![8, 9]]);
    }

    #[test]
    fn test_partial_count() {
        let mut reader = BlockReader::new(&[1u8, 0, 0][..]);
        assert!(matches!(reader.next_block(), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_truncated_payload() {
        let mut data = framed(&[&[1, 2, 3]]);
        data.truncate(data.len() - 3);
        let mut reader = BlockReader::new(data.as_slice());
        assert!(matches!(
            reader.next_block(),
            Err(Error::TruncatedBlock { expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_huge_count_does_not_allocate() {
        let data = u64::MAX.to_le_bytes();
        let mut reader = BlockReader::new(&data[..]);
        assert!(matches!(reader.next_block(), Err(Error::TruncatedBlock { found: 0, .. })));
    }
}
