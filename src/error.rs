use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Usage errors
    #[error("Invalid block size: {0} (must be between 1 and 1073741824 bytes)")]
    InvalidBlockSize(usize),

    // Huffman stream errors
    #[error("Empty Huffman stream")]
    EmptyStream,

    #[error("Frequency table truncated: {declared} entries declared, {available} words available")]
    TruncatedFrequencyTable { declared: u64, available: usize },

    #[error("Invalid frequency count {count} for byte 0x{byte:02x}")]
    InvalidFrequencyCount { byte: u8, count: i64 },

    #[error("Duplicate frequency entry for byte 0x{0:02x}")]
    DuplicateFrequencyEntry(u8),

    #[error("Bit stream truncated: {bits} bits declared, {words} words available")]
    TruncatedBitStream { bits: u64, words: usize },

    #[error("Bit stream ended inside a Huffman code")]
    IncompleteCode,

    #[error("Decoded {found} symbols but the frequency table declares {expected}")]
    SymbolCountMismatch { expected: u64, found: u64 },

    #[error("Frequency table declares {count} symbols, more than the {max} a block may hold")]
    SymbolCountTooLarge { count: u64, max: usize },

    #[error("Bit stream carries {0} bits but the code tree has no branches")]
    UnexpectedBits(u64),

    // LZW stream errors
    #[error("Packed word header truncated")]
    TruncatedPackedHeader,

    #[error("Invalid packing stride: {0} (expected 1, 2, 4 or 8)")]
    InvalidStride(u64),

    #[error("Packed words truncated: {expected} words needed, {found} available")]
    TruncatedPackedWords { expected: usize, found: usize },

    #[error("Invalid LZW code {code} (next free code is {next})")]
    InvalidLzwCode { code: u64, next: u64 },

    // Container errors
    #[error("Block truncated: {expected} words declared, {found} available")]
    TruncatedBlock { expected: u64, found: usize },

    #[error("Unexpected end of input")]
    UnexpectedEof,
}

impl Error {
    /// Whether this error describes corrupt or truncated compressed input
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::InvalidBlockSize(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
