pub mod constants;
pub mod reader;
pub mod writer;

pub use constants::*;
pub use reader::BlockReader;
pub use writer::BlockWriter;
