#![no_main]

use blockpack::{Algorithm, ArchiveConfig, Archiver};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // First byte picks the codec and block size, the rest is the payload
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };

    let algorithm = if selector & 1 == 0 { Algorithm::Huffman } else { Algorithm::Lzw };
    let block_size = (selector as usize >> 1) + 1;
    let archiver = Archiver::new(ArchiveConfig { block_size, algorithm, ..Default::default() });

    let mut compressed = Vec::new();
    archiver.compress(Cursor::new(payload), &mut compressed).expect("compress into memory");

    let mut restored = Vec::new();
    archiver.decompress(Cursor::new(&compressed), &mut restored).expect("decompress own output");
    assert_eq!(restored, payload, "Round-trip mismatch");
});
