use crate::cursor::Cursor;
use crate::error::ParseError;

#[test]
fn peek_does_not_advance() {
    let cursor = Cursor::new(b"ab");
    assert_eq!(cursor.peek(), Some(b'a'));
    assert_eq!(cursor.peek(), Some(b'a'));
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn bump_advances() {
    let mut cursor = Cursor::new(b"ab");
    assert_eq!(cursor.bump().unwrap(), b'a');
    assert_eq!(cursor.bump().unwrap(), b'b');
    assert!(cursor.at_end());
}

#[test]
fn bump_at_end_fails() {
    let mut cursor = Cursor::new(b"a");
    cursor.bump().unwrap();

    assert_eq!(
        cursor.bump().unwrap_err(),
        ParseError::UnexpectedEndOfInput { offset: 1 }
    );
    // Still at the end; the failed bump moved nothing.
    assert_eq!(cursor.offset(), 1);
}

#[test]
fn peek_at_looks_ahead() {
    let cursor = Cursor::new(b"abc");
    assert_eq!(cursor.peek_at(0), Some(b'a'));
    assert_eq!(cursor.peek_at(2), Some(b'c'));
    assert_eq!(cursor.peek_at(3), None);
}

#[test]
fn starts_with_matches_prefix() {
    let mut cursor = Cursor::new(b"x::=y");
    cursor.skip(1);
    assert!(cursor.starts_with(b"::="));
    assert!(!cursor.starts_with(b"::=yz"));
}

#[test]
fn slice_returns_consumed_range() {
    let mut cursor = Cursor::new(b"name rest");
    while cursor.peek().is_some_and(|b| b != b' ') {
        cursor.skip(1);
    }
    assert_eq!(cursor.slice(0, cursor.offset()), b"name");
}

#[test]
fn empty_input_is_at_end() {
    let cursor = Cursor::new(b"");
    assert!(cursor.at_end());
    assert_eq!(cursor.peek(), None);
}
