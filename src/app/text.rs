//! Text helpers: BOM-based encoding detection, strict decoding, and the
//! token estimate used by the walk statistics.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Encodings recognizable from a leading byte-order mark. Anything
/// without a mark is read as plain UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl Encoding {
    fn bom_len(self) -> usize {
        match self {
            Encoding::Utf8 => 0,
            Encoding::Utf8Bom => 3,
            Encoding::Utf16Le | Encoding::Utf16Be => 2,
            Encoding::Utf32Le | Encoding::Utf32Be => 4,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf8Bom => "utf-8-sig",
            Encoding::Utf16Le => "utf-16-le",
            Encoding::Utf16Be => "utf-16-be",
            Encoding::Utf32Le => "utf-32-le",
            Encoding::Utf32Be => "utf-32-be",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
#[error("invalid {encoding} data")]
pub struct DecodeError {
    pub encoding: Encoding,
}

/// A file that passed filtering but could not be turned into text.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Decode(#[from] DecodeError),
}

/// Inspects the first bytes for a BOM signature. The 4-byte UTF-32 marks
/// are matched before the 2-byte UTF-16 marks they start with.
pub fn detect_encoding(prefix: &[u8]) -> Encoding {
    if prefix.starts_with(&[0x00, 0x00, 0xFE, 0xFF]) {
        Encoding::Utf32Be
    } else if prefix.starts_with(&[0xFF, 0xFE, 0x00, 0x00]) {
        Encoding::Utf32Le
    } else if prefix.starts_with(&[0xEF, 0xBB, 0xBF]) {
        Encoding::Utf8Bom
    } else if prefix.starts_with(&[0xFF, 0xFE]) {
        Encoding::Utf16Le
    } else if prefix.starts_with(&[0xFE, 0xFF]) {
        Encoding::Utf16Be
    } else {
        Encoding::Utf8
    }
}

/// Strict decode of `bytes` (BOM included) as `encoding`. Truncated code
/// units, unpaired surrogates and out-of-range values all fail.
pub fn decode(bytes: &[u8], encoding: Encoding) -> Result<String, DecodeError> {
    let body = &bytes[encoding.bom_len()..];

    match encoding {
        Encoding::Utf8 | Encoding::Utf8Bom => String::from_utf8(body.to_vec())
            .map_err(|_| DecodeError { encoding }),
        Encoding::Utf16Le | Encoding::Utf16Be => {
            if body.len() % 2 != 0 {
                return Err(DecodeError { encoding });
            }
            let units: Vec<u16> = body
                .chunks_exact(2)
                .map(|pair| {
                    let pair = [pair[0], pair[1]];
                    if encoding == Encoding::Utf16Le {
                        u16::from_le_bytes(pair)
                    } else {
                        u16::from_be_bytes(pair)
                    }
                })
                .collect();
            String::from_utf16(&units).map_err(|_| DecodeError { encoding })
        }
        Encoding::Utf32Le | Encoding::Utf32Be => {
            if body.len() % 4 != 0 {
                return Err(DecodeError { encoding });
            }
            body.chunks_exact(4)
                .map(|quad| {
                    let quad = [quad[0], quad[1], quad[2], quad[3]];
                    let value = if encoding == Encoding::Utf32Le {
                        u32::from_le_bytes(quad)
                    } else {
                        u32::from_be_bytes(quad)
                    };
                    char::from_u32(value).ok_or(DecodeError { encoding })
                })
                .collect()
        }
    }
}

/// Reads a whole file with BOM-detected encoding.
pub fn read_file(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    let encoding = detect_encoding(&bytes);
    Ok(decode(&bytes, encoding)?)
}

/// Crude token estimate: whitespace-separated words, plus characters that
/// are neither ASCII alphanumeric nor whitespace, plus `words / 4`. The
/// formula is kept as-is so counts stay comparable across runs.
pub fn estimate_tokens(text: &str) -> usize {
    let words = text.split_whitespace().count();
    let special = text
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
        .count();
    words + special + words / 4
}
