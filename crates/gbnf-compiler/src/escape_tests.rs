use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::escape::{decode_char, decode_hex, decode_utf8};

fn decode_one(src: &[u8]) -> Result<u32, ParseError> {
    decode_char(&mut Cursor::new(src))
}

#[test]
fn ascii_passthrough() {
    assert_eq!(decode_one(b"a").unwrap(), 'a' as u32);
    assert_eq!(decode_one(b"0").unwrap(), '0' as u32);
}

#[test]
fn utf8_multibyte() {
    assert_eq!(decode_one("é".as_bytes()).unwrap(), 0xE9);
    assert_eq!(decode_one("❤".as_bytes()).unwrap(), 0x2764);
    assert_eq!(decode_one("😀".as_bytes()).unwrap(), 0x1F600);
}

#[test]
fn utf8_consumes_whole_sequence() {
    let mut cursor = Cursor::new("éx".as_bytes());
    decode_utf8(&mut cursor).unwrap();
    assert_eq!(cursor.peek(), Some(b'x'));
}

#[test]
fn utf8_truncated_sequence_fails() {
    // 0xE2 opens a 3-byte sequence; input ends after one byte.
    assert_eq!(
        decode_utf8(&mut Cursor::new(&[0xE2])).unwrap_err(),
        ParseError::InvalidEscape { offset: 0 }
    );
}

#[test]
fn utf8_missing_continuation_fails() {
    // 0xC3 needs a continuation byte; 'x' is not one.
    assert_eq!(
        decode_utf8(&mut Cursor::new(&[0xC3, b'x'])).unwrap_err(),
        ParseError::InvalidEscape { offset: 0 }
    );
}

#[test]
fn literal_escapes() {
    assert_eq!(decode_one(b"\\n").unwrap(), '\n' as u32);
    assert_eq!(decode_one(b"\\r").unwrap(), '\r' as u32);
    assert_eq!(decode_one(b"\\t").unwrap(), '\t' as u32);
    assert_eq!(decode_one(b"\\\\").unwrap(), '\\' as u32);
    assert_eq!(decode_one(b"\\\"").unwrap(), '"' as u32);
    assert_eq!(decode_one(b"\\[").unwrap(), '[' as u32);
    assert_eq!(decode_one(b"\\]").unwrap(), ']' as u32);
}

#[test]
fn hex_escapes() {
    assert_eq!(decode_one(b"\\x41").unwrap(), 0x41);
    assert_eq!(decode_one(b"\\xff").unwrap(), 0xFF);
    assert_eq!(decode_one(b"\\u0041").unwrap(), 0x41);
    assert_eq!(decode_one(b"\\u2764").unwrap(), 0x2764);
    assert_eq!(decode_one(b"\\U0001F600").unwrap(), 0x1F600);
}

#[test]
fn hex_digits_are_case_insensitive() {
    assert_eq!(decode_one(b"\\xAb").unwrap(), 0xAB);
    assert_eq!(decode_one(b"\\xaB").unwrap(), 0xAB);
}

#[test]
fn unknown_escape_fails() {
    assert_eq!(
        decode_one(b"\\q").unwrap_err(),
        ParseError::InvalidEscape { offset: 0 }
    );
}

#[test]
fn dangling_backslash_fails() {
    assert_eq!(
        decode_one(b"\\").unwrap_err(),
        ParseError::InvalidEscape { offset: 0 }
    );
}

#[test]
fn short_hex_fails_at_the_backslash() {
    // One digit where two are required; the error points at the backslash.
    assert_eq!(
        decode_one(b"\\x1").unwrap_err(),
        ParseError::InvalidHex {
            expected: 2,
            offset: 0
        }
    );
    assert_eq!(
        decode_one(b"\\u12").unwrap_err(),
        ParseError::InvalidHex {
            expected: 4,
            offset: 0
        }
    );
}

#[test]
fn hex_stops_at_non_digit() {
    assert_eq!(
        decode_one(b"\\x1g").unwrap_err(),
        ParseError::InvalidHex {
            expected: 2,
            offset: 0
        }
    );
}

#[test]
fn decode_hex_reports_its_own_offset() {
    let mut cursor = Cursor::new(b"zz");
    assert_eq!(
        decode_hex(&mut cursor, 2).unwrap_err(),
        ParseError::InvalidHex {
            expected: 2,
            offset: 0
        }
    );
}

#[test]
fn decode_char_at_end_of_input() {
    assert_eq!(
        decode_one(b"").unwrap_err(),
        ParseError::UnexpectedEndOfInput { offset: 0 }
    );
}
