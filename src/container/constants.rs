/// Default uncompressed block size
pub const DEFAULT_BLOCK_SIZE: usize = 1_000_000;

/// Largest accepted block size
///
/// Decoders also reject blocks that declare more bytes than this.
pub const MAX_BLOCK_SIZE: usize = 1 << 30;

/// Size of the word-count prefix in front of every block
pub const BLOCK_HEADER_SIZE: usize = crate::bits::WORD_BYTES;
