//! Strings and code points: byte length versus code point count, and two
//! equivalent ways of walking a UTF-8 string with byte offsets.

use serde::{Deserialize, Serialize};

use crate::utf8::{self, ManualDecoder};
use crate::{LessonError, Transcript};

/// Inputs for the runes lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunesInput {
    pub text: String,
}

impl Default for RunesInput {
    fn default() -> Self {
        // "hello" in Portuguese.
        Self {
            text: "olá".to_string(),
        }
    }
}

/// One decoded code point and the byte offset it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodedRune {
    pub offset: usize,
    pub code_point: char,
}

impl From<(usize, char)> for DecodedRune {
    fn from((offset, code_point): (usize, char)) -> Self {
        Self { offset, code_point }
    }
}

/// A classifier hit produced by [`examine`] during manual decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub offset: usize,
    pub message: &'static str,
}

/// Returns a message when `c` is one of the letters being looked for.
pub fn examine(c: char) -> Option<&'static str> {
    if c == 'o' {
        Some("found o")
    } else if c == 'l' {
        Some("found so l")
    } else {
        None
    }
}

/// Format characters (general category Cf), as inclusive ranges.
const FORMAT_CHARS: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x180E, 0x180E),
    (0x200B, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
];

fn is_format(c: char) -> bool {
    let cp = u32::from(c);
    FORMAT_CHARS
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

fn is_private_use(c: char) -> bool {
    matches!(
        u32::from(c),
        0xE000..=0xF8FF | 0xF_0000..=0xF_FFFD | 0x10_0000..=0x10_FFFD
    )
}

/// Whether `c` is shown with its glyph: not a control, format, or
/// private-use character, and not whitespace other than U+0020.
///
/// Unassigned code points are still treated as printable.
pub fn is_printable(c: char) -> bool {
    !(c.is_control()
        || is_format(c)
        || is_private_use(c)
        || (c != ' ' && c.is_whitespace()))
}

/// Formats a code point as `U+006F 'o'`, leaving out the quoted glyph for
/// characters that do not print (see [`is_printable`]).
pub fn format_code_point(c: char) -> String {
    if is_printable(c) {
        format!("U+{:04X} '{c}'", u32::from(c))
    } else {
        format!("U+{:04X}", u32::from(c))
    }
}

/// Renders every byte as lowercase hex, separated by spaces.
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses whitespace-separated hex bytes such as `"6f 6c c3 a1"`.
///
/// # Errors
///
/// Returns [`LessonError::OddHexLength`] for tokens that are not exactly two
/// digits and [`LessonError::InvalidHex`] for non-hex characters.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, LessonError> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            if token.len() != 2 {
                return Err(LessonError::OddHexLength {
                    token: token.to_string(),
                });
            }
            let invalid = || LessonError::InvalidHex {
                token: token.to_string(),
                position,
            };
            // from_str_radix alone would accept a leading '+'.
            if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            u8::from_str_radix(token, 16).map_err(|_| invalid())
        })
        .collect()
}

/// Result of running the runes lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunesReport {
    pub byte_len: usize,
    pub hex: String,
    pub code_point_count: usize,
    /// Sequence produced by the standard library's decoder.
    pub builtin: Vec<DecodedRune>,
    /// Sequence produced by stepping through [`utf8::decode_first`].
    pub manual: Vec<DecodedRune>,
    pub findings: Vec<Finding>,
}

impl RunesReport {
    pub fn transcript(&self) -> Transcript {
        let mut out = Transcript::new();
        out.line(format!("Len: {}", self.byte_len));
        out.line(self.hex.clone());
        out.line(format!("Rune count: {}", self.code_point_count));

        for rune in &self.builtin {
            out.line(starts_at(rune));
        }

        out.blank();
        out.line("Using manual decoding");
        for rune in &self.manual {
            out.line(starts_at(rune));
            if let Some(message) = examine(rune.code_point) {
                out.line(message);
            }
        }
        out
    }

    /// Whether both decoders produced the same sequence.
    pub fn decoders_agree(&self) -> bool {
        self.builtin == self.manual
    }
}

fn starts_at(rune: &DecodedRune) -> String {
    format!(
        "{} starts at {}",
        format_code_point(rune.code_point),
        rune.offset
    )
}

/// Runs the runes lesson over raw bytes.
///
/// Bytes need not be valid UTF-8; ill-formed sequences decode to U+FFFD.
pub fn run_bytes(bytes: &[u8]) -> RunesReport {
    let builtin: Vec<DecodedRune> = utf8::builtin_decoder(bytes).map(DecodedRune::from).collect();

    let mut manual = Vec::with_capacity(builtin.len());
    let mut findings = Vec::new();
    for (offset, code_point) in ManualDecoder::new(bytes) {
        manual.push(DecodedRune { offset, code_point });
        if let Some(message) = examine(code_point) {
            findings.push(Finding { offset, message });
        }
    }

    tracing::debug!(
        bytes = bytes.len(),
        code_points = manual.len(),
        findings = findings.len(),
        "runes decoded"
    );

    RunesReport {
        byte_len: bytes.len(),
        hex: hex_bytes(bytes),
        code_point_count: utf8::count_code_points(bytes),
        builtin,
        manual,
        findings,
    }
}

/// Runs the runes lesson over the configured text.
pub fn run(input: &RunesInput) -> RunesReport {
    run_bytes(input.text.as_bytes())
}
