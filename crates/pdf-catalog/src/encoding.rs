//! WinAnsiEncoding for the builtin Helvetica faces
//!
//! The standard 14 fonts are declared with `/WinAnsiEncoding`, so every text
//! run must be one byte per character in that code page.

/// Byte written for characters the code page cannot represent
pub const FALLBACK: u8 = b'?';

/// Code points of 0x80..=0x9F; `None` marks the five undefined slots
const HIGH_CONTROL_RANGE: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// Encode one character, if the code page has it
pub fn encode_char(ch: char) -> Option<u8> {
    match ch as u32 {
        0x00..=0x7F | 0xA0..=0xFF => Some(ch as u32 as u8),
        _ => HIGH_CONTROL_RANGE
            .iter()
            .position(|slot| *slot == Some(ch))
            .map(|index| 0x80 + index as u8),
    }
}

/// Encode `text`, substituting [`FALLBACK`] for unmappable characters
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| encode_char(ch).unwrap_or(FALLBACK))
        .collect()
}

/// Decode WinAnsi bytes back to text
pub fn from_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => HIGH_CONTROL_RANGE[(b - 0x80) as usize].unwrap_or('\u{FFFD}'),
            _ => b as char,
        })
        .collect()
}
