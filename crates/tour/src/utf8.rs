//! Hand-rolled UTF-8 decoding.
//!
//! [`decode_first`] decodes one code point from the front of a byte slice
//! using the well-formed byte sequence table from the Unicode standard
//! (Table 3-7). [`ManualDecoder`] steps through a byte slice with it.
//!
//! | Lead       | 2nd      | 3rd      | 4th      |
//! |------------|----------|----------|----------|
//! | `00..=7F`  |          |          |          |
//! | `C2..=DF`  | `80..=BF`|          |          |
//! | `E0`       | `A0..=BF`| `80..=BF`|          |
//! | `E1..=EC`  | `80..=BF`| `80..=BF`|          |
//! | `ED`       | `80..=9F`| `80..=BF`|          |
//! | `EE..=EF`  | `80..=BF`| `80..=BF`|          |
//! | `F0`       | `90..=BF`| `80..=BF`| `80..=BF`|
//! | `F1..=F3`  | `80..=BF`| `80..=BF`| `80..=BF`|
//! | `F4`       | `80..=8F`| `80..=BF`| `80..=BF`|
//!
//! Any other sequence, including a truncated one, decodes to
//! [`char::REPLACEMENT_CHARACTER`] with width 1.

use std::ops::RangeInclusive;

const CONT: RangeInclusive<u8> = 0x80..=0xBF;

/// Decodes the first code point of `bytes`.
///
/// Returns the code point and the number of bytes it occupies. Invalid or
/// truncated input yields `(U+FFFD, 1)`; empty input yields `(U+FFFD, 0)`.
///
/// ```
/// use tour::utf8::decode_first;
///
/// assert_eq!(decode_first("á!".as_bytes()), ('á', 2));
/// assert_eq!(decode_first(&[0xC3]), (char::REPLACEMENT_CHARACTER, 1));
/// ```
pub fn decode_first(bytes: &[u8]) -> (char, usize) {
    let Some(&b0) = bytes.first() else {
        return (char::REPLACEMENT_CHARACTER, 0);
    };

    if b0 < 0x80 {
        return (char::from(b0), 1);
    }

    let (width, second) = match b0 {
        0xC2..=0xDF => (2, CONT),
        0xE0 => (3, 0xA0..=0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (3, CONT),
        0xED => (3, 0x80..=0x9F),
        0xF0 => (4, 0x90..=0xBF),
        0xF1..=0xF3 => (4, CONT),
        0xF4 => (4, 0x80..=0x8F),
        _ => return invalid(),
    };

    if bytes.len() < width {
        return invalid();
    }
    if !second.contains(&bytes[1]) || !bytes[2..width].iter().all(|b| CONT.contains(b)) {
        return invalid();
    }

    let lead_bits = match width {
        2 => u32::from(b0 & 0x1F),
        3 => u32::from(b0 & 0x0F),
        _ => u32::from(b0 & 0x07),
    };
    let scalar = bytes[1..width]
        .iter()
        .fold(lead_bits, |acc, &b| (acc << 6) | u32::from(b & 0x3F));

    // The table above admits only scalar values, so this never falls back.
    match char::from_u32(scalar) {
        Some(c) => (c, width),
        None => invalid(),
    }
}

fn invalid() -> (char, usize) {
    (char::REPLACEMENT_CHARACTER, 1)
}

/// Lazy `(byte offset, code point)` iterator driven by [`decode_first`].
#[derive(Debug, Clone)]
pub struct ManualDecoder<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ManualDecoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Iterator for ManualDecoder<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        let start = self.pos;
        let (c, width) = decode_first(&self.bytes[start..]);
        tracing::trace!(offset = start, width, "decoded code point");
        self.pos += width;
        Some((start, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.pos;
        (remaining.div_ceil(4), Some(remaining))
    }
}

/// Lazy `(byte offset, code point)` iterator built on the standard library's
/// decoder.
///
/// Valid runs are walked with [`str::char_indices`]. Every byte of an invalid
/// run yields one replacement character, matching [`ManualDecoder`].
pub fn builtin_decoder(bytes: &[u8]) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut base = 0;
    bytes.utf8_chunks().flat_map(move |chunk| {
        let valid = chunk.valid();
        let invalid = chunk.invalid();
        let start = base;
        base += valid.len() + invalid.len();

        let invalid_start = start + valid.len();
        let replacements = (0..invalid.len())
            .map(move |i| (invalid_start + i, char::REPLACEMENT_CHARACTER));
        valid
            .char_indices()
            .map(move |(i, c)| (start + i, c))
            .chain(replacements)
    })
}

/// Counts code points the way [`ManualDecoder`] sees them.
pub fn count_code_points(bytes: &[u8]) -> usize {
    ManualDecoder::new(bytes).count()
}
