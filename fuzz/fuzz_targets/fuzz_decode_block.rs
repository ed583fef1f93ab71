#![no_main]

use blockpack::{BlockCodec, HuffmanCodec, LzwCodec, Word};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let words: Vec<Word> = data
        .chunks_exact(8)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            Word::from_le_bytes(word)
        })
        .collect();

    // Arbitrary words may fail to decode, but must never panic
    let _ = HuffmanCodec.dearchivate(&words);
    let _ = LzwCodec.dearchivate(&words);
});
