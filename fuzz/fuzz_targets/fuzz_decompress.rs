#![no_main]

use blockpack::{Algorithm, ArchiveConfig, Archiver};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Damaged archives are expected to fail - we're looking for panics
    for algorithm in [Algorithm::Huffman, Algorithm::Lzw] {
        let archiver = Archiver::new(ArchiveConfig { algorithm, ..Default::default() });
        let _ = archiver.decompress(Cursor::new(data), std::io::sink());
    }
});
