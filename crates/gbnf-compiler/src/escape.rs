//! Codepoint decoding: raw UTF-8, fixed-width hex, and backslash escapes.

use crate::cursor::Cursor;
use crate::error::{ParseError, Result};

/// UTF-8 sequence length keyed by the first byte's high nibble.
const UTF8_LEN: [usize; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 4];

/// Decode one UTF-8 sequence into a codepoint.
///
/// A missing continuation byte, or input ending mid-sequence, is an
/// [`ParseError::InvalidEscape`] at the sequence start.
pub fn decode_utf8(cursor: &mut Cursor) -> Result<u32> {
    let start = cursor.offset();
    let first = cursor.bump()?;
    let len = UTF8_LEN[(first >> 4) as usize];
    let mask = (1u32 << (8 - len as u32)) - 1;
    let mut value = first as u32 & mask;

    for _ in 1..len {
        let byte = match cursor.peek() {
            Some(byte) if byte & 0xC0 == 0x80 => byte,
            _ => return Err(ParseError::InvalidEscape { offset: start }),
        };
        cursor.skip(1);
        value = (value << 6) | (byte as u32 & 0x3F);
    }

    Ok(value)
}

/// Decode exactly `digits` case-insensitive hex digits.
pub fn decode_hex(cursor: &mut Cursor, digits: usize) -> Result<u32> {
    let start = cursor.offset();
    let mut value = 0u32;

    for _ in 0..digits {
        let nibble = match cursor.peek().and_then(hex_value) {
            Some(nibble) => nibble,
            None => {
                return Err(ParseError::InvalidHex {
                    expected: digits,
                    offset: start,
                });
            }
        };
        cursor.skip(1);
        value = (value << 4) | nibble;
    }

    Ok(value)
}

/// Decode the next source character: a backslash escape or raw UTF-8.
///
/// Escapes: `\n \r \t \\ \" \[ \]`, plus `\xHH`, `\uHHHH`, `\UHHHHHHHH`.
/// Errors point at the backslash.
pub fn decode_char(cursor: &mut Cursor) -> Result<u32> {
    let start = cursor.offset();

    if cursor.peek() != Some(b'\\') {
        return decode_utf8(cursor);
    }
    cursor.skip(1);

    let escape = cursor
        .bump()
        .map_err(|_| ParseError::InvalidEscape { offset: start })?;
    match escape {
        b'x' => decode_hex(cursor, 2).map_err(|e| at_offset(e, start)),
        b'u' => decode_hex(cursor, 4).map_err(|e| at_offset(e, start)),
        b'U' => decode_hex(cursor, 8).map_err(|e| at_offset(e, start)),
        b't' => Ok('\t' as u32),
        b'r' => Ok('\r' as u32),
        b'n' => Ok('\n' as u32),
        b'\\' | b'"' | b'[' | b']' => Ok(escape as u32),
        _ => Err(ParseError::InvalidEscape { offset: start }),
    }
}

/// Re-point a hex error at the escape's backslash.
fn at_offset(err: ParseError, offset: usize) -> ParseError {
    match err {
        ParseError::InvalidHex { expected, .. } => ParseError::InvalidHex { expected, offset },
        other => other,
    }
}

fn hex_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'a'..=b'f' => Some((byte - b'a' + 10) as u32),
        b'A'..=b'F' => Some((byte - b'A' + 10) as u32),
        _ => None,
    }
}
