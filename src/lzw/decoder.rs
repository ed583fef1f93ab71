use super::{packing, INITIAL_CODES};
use crate::bits::Word;
use crate::error::{Error, Result};
use log::trace;

/// Decompress one block produced by [`super::encoder::encode`]
pub fn decode(words: &[Word]) -> Result<Vec<u8>> {
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let codes = packing::unpack(words)?;
    let output = decode_codes(&codes)?;
    trace!("lzw: {} codes -> {} bytes", codes.len(), output.len());
    Ok(output)
}

/// Rebuild the dictionary while expanding `codes`
pub fn decode_codes(codes: &[Word]) -> Result<Vec<u8>> {
    let Some((&first, rest)) = codes.split_first() else {
        return Ok(Vec::new());
    };
    if first >= INITIAL_CODES {
        return Err(Error::InvalidLzwCode { code: first, next: INITIAL_CODES });
    }

    let mut table = Table::new();
    let mut output = vec![first as u8];
    let mut previous = first;

    for &code in rest {
        let next = table.next_code();
        let start = output.len();

        if code < next {
            table.expand(code, &mut output);
        } else if code == next {
            // The entry being defined: previous string plus its own first byte
            table.expand(previous, &mut output);
            output.push(output[start]);
        } else {
            return Err(Error::InvalidLzwCode { code, next });
        }

        table.insert(previous, output[start]);
        previous = code;
    }

    Ok(output)
}

/// Decode-side dictionary
///
/// Entry `INITIAL_CODES + i` is `entries[i]`: the string of its prefix code
/// followed by one byte. Codes below `INITIAL_CODES` are single bytes.
struct Table {
    entries: Vec<(Word, u8)>,
}

impl Table {
    fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn next_code(&self) -> Word {
        INITIAL_CODES + self.entries.len() as Word
    }

    fn insert(&mut self, prefix: Word, byte: u8) {
        self.entries.push((prefix, byte));
    }

    /// Append the string for `code` (which must be defined) to `output`
    fn expand(&self, mut code: Word, output: &mut Vec<u8>) {
        let start = output.len();
        while code >= INITIAL_CODES {
            let (prefix, byte) = self.entries[(code - INITIAL_CODES) as usize];
            output.push(byte);
            code = prefix;
        }
        output.push(code as u8);
        output[start..].reverse();
    }
}
