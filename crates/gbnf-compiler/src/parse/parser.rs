//! Parser state, rule definitions, and the top-level drive loop.

use gbnf_grammar::{ElementKind, Grammar};

use crate::cursor::Cursor;
use crate::error::{ParseError, Result};

/// Compile grammar text into a [`Grammar`].
///
/// The whole compile either succeeds or fails with the first positioned
/// error; no partial grammar is ever returned. Compilation is a pure
/// function of the source bytes: the same input always produces the same
/// symbol and rule tables.
pub fn compile(src: &str) -> Result<Grammar> {
    let mut parser = Parser::new(src);
    parser.skip_space(true);
    while !parser.cursor.at_end() {
        parser.parse_rule()?;
    }
    parser.finish()
}

/// Recursive-descent parser over one grammar source.
///
/// Owns the cursor and the grammar under construction; all compile state
/// lives in this value.
pub(super) struct Parser<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) grammar: Grammar,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            cursor: Cursor::new(src.as_bytes()),
            grammar: Grammar::new(),
        }
    }

    /// Skip spaces, tabs, and `#` comments.
    ///
    /// Newlines terminate rule definitions, so they only count as space
    /// where the dialect allows them: after `::=` and `|`, inside
    /// parentheses, and between rules.
    pub(super) fn skip_space(&mut self, newline_ok: bool) {
        while let Some(byte) = self.cursor.peek() {
            match byte {
                b' ' | b'\t' => self.cursor.skip(1),
                b'#' => {
                    while self
                        .cursor
                        .peek()
                        .is_some_and(|b| b != b'\r' && b != b'\n')
                    {
                        self.cursor.skip(1);
                    }
                }
                b'\r' | b'\n' if newline_ok => self.cursor.skip(1),
                _ => break,
            }
        }
    }

    /// Parse an identifier: letters, digits, and hyphens, at least one.
    pub(super) fn parse_name(&mut self) -> Result<&'a str> {
        let start = self.cursor.offset();
        while self.cursor.peek().is_some_and(is_word_char) {
            self.cursor.skip(1);
        }
        let end = self.cursor.offset();
        if start == end {
            return Err(ParseError::UnexpectedToken {
                expected: "rule name",
                offset: start,
            });
        }
        let name = self.cursor.slice(start, end);
        Ok(std::str::from_utf8(name).expect("identifier bytes are ASCII"))
    }

    /// One `name ::= alternates` definition, terminated by a newline or end
    /// of input.
    fn parse_rule(&mut self) -> Result<()> {
        let name = self.parse_name()?;
        self.skip_space(false);
        let rule_id = self.grammar.symbols_mut().id_for(name);

        if !self.cursor.starts_with(b"::=") {
            return Err(ParseError::UnexpectedToken {
                expected: "`::=`",
                offset: self.cursor.offset(),
            });
        }
        self.cursor.skip(3);
        self.skip_space(true);

        self.parse_alternates(name, rule_id, false)?;

        match self.cursor.peek() {
            Some(b'\r') => {
                let crlf = self.cursor.peek_at(1) == Some(b'\n');
                self.cursor.skip(if crlf { 2 } else { 1 });
            }
            Some(b'\n') => self.cursor.skip(1),
            Some(_) => {
                return Err(ParseError::UnexpectedToken {
                    expected: "newline or end of input",
                    offset: self.cursor.offset(),
                });
            }
            None => {}
        }
        self.skip_space(true);
        Ok(())
    }

    /// Post-pass checks once every definition is in.
    fn finish(self) -> Result<Grammar> {
        let grammar = self.grammar;

        if grammar.root_id().is_none() {
            return Err(ParseError::MissingRootRule);
        }

        // Forward references are fine while parsing, but by now every
        // referenced rule must have a filled slot.
        for rule in grammar.rules() {
            for elem in rule {
                if elem.kind != ElementKind::RuleRef {
                    continue;
                }
                if grammar.rule(elem.value).is_none_or(|r| r.is_empty()) {
                    let name = grammar.name_of(elem.value).unwrap_or("?").to_owned();
                    return Err(ParseError::UndefinedRule { name });
                }
            }
        }

        Ok(grammar)
    }
}

/// Identifier characters: letters, digits, hyphens.
pub(super) fn is_word_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}
