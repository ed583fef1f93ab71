pub mod buffer;

pub use buffer::BitBuffer;

/// Storage unit for every on-disk structure
pub type Word = u64;

/// Bits per word
pub const WORD_BITS: usize = Word::BITS as usize;

/// Bytes per word on disk (little-endian)
pub const WORD_BYTES: usize = std::mem::size_of::<Word>();
