//! Alternatives, sequences, and atoms.

use gbnf_grammar::{GrammarElement, RuleId};

use super::parser::{Parser, is_word_char};
use crate::error::{ParseError, Result};
use crate::escape::decode_char;

impl<'a> Parser<'a> {
    /// `sequence (| sequence)*`, stored as rule `rule_id`.
    ///
    /// `rule_name` seeds the names of rules synthesized inside. `nested` is
    /// true inside parentheses, where newlines are plain space.
    pub(super) fn parse_alternates(
        &mut self,
        rule_name: &str,
        rule_id: RuleId,
        nested: bool,
    ) -> Result<()> {
        let mut elements = Vec::new();
        self.parse_sequence(rule_name, &mut elements, nested)?;
        while self.cursor.peek() == Some(b'|') {
            elements.push(GrammarElement::ALT);
            self.cursor.skip(1);
            self.skip_space(true);
            self.parse_sequence(rule_name, &mut elements, nested)?;
        }
        elements.push(GrammarElement::END);
        self.grammar.set_rule(rule_id, elements);
        Ok(())
    }

    /// Zero or more atoms appended to `out` in order. Concatenation has no
    /// separator element.
    fn parse_sequence(
        &mut self,
        rule_name: &str,
        out: &mut Vec<GrammarElement>,
        nested: bool,
    ) -> Result<()> {
        // Index where the latest atom's elements begin; quantifiers rewrite
        // everything from here.
        let mut last_sym_start = out.len();

        while let Some(byte) = self.cursor.peek() {
            match byte {
                b'"' => {
                    last_sym_start = out.len();
                    self.parse_literal(out)?;
                    self.skip_space(nested);
                }
                b'[' => {
                    last_sym_start = out.len();
                    self.parse_char_class(out)?;
                    self.skip_space(nested);
                }
                b'(' => {
                    self.cursor.skip(1);
                    self.skip_space(true);
                    // A group compiles into its own rule so nested `|`
                    // cannot leak into the enclosing alternation.
                    let sub_id = self.grammar.symbols_mut().fresh_anonymous(rule_name);
                    self.parse_alternates(rule_name, sub_id, true)?;
                    if self.cursor.peek() != Some(b')') {
                        return Err(ParseError::UnexpectedToken {
                            expected: "`)`",
                            offset: self.cursor.offset(),
                        });
                    }
                    self.cursor.skip(1);
                    last_sym_start = out.len();
                    out.push(GrammarElement::rule_ref(sub_id));
                    self.skip_space(nested);
                }
                b'*' | b'+' | b'?' => {
                    if last_sym_start == out.len() {
                        return Err(ParseError::UnexpectedToken {
                            expected: "an item before `*`, `+`, or `?`",
                            offset: self.cursor.offset(),
                        });
                    }
                    self.desugar_quantifier(byte, rule_name, out, last_sym_start);
                    self.cursor.skip(1);
                    self.skip_space(nested);
                }
                b if is_word_char(b) => {
                    let name = self.parse_name()?;
                    let ref_id = self.grammar.symbols_mut().id_for(name);
                    self.skip_space(nested);
                    last_sym_start = out.len();
                    out.push(GrammarElement::rule_ref(ref_id));
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// `"…"`: one Char element per decoded character.
    fn parse_literal(&mut self, out: &mut Vec<GrammarElement>) -> Result<()> {
        let start = self.cursor.offset();
        self.cursor.skip(1); // opening quote
        loop {
            match self.cursor.peek() {
                None => return Err(ParseError::UnterminatedLiteral { offset: start }),
                Some(b'"') => break,
                Some(_) => {
                    let codepoint = decode_char(&mut self.cursor)?;
                    out.push(GrammarElement::char_match(codepoint));
                }
            }
        }
        self.cursor.skip(1); // closing quote
        Ok(())
    }

    /// `[…]` with optional leading `^`; members are single characters or
    /// `a-b` ranges.
    fn parse_char_class(&mut self, out: &mut Vec<GrammarElement>) -> Result<()> {
        let start = self.cursor.offset();
        self.cursor.skip(1); // opening bracket
        let negated = self.cursor.peek() == Some(b'^');
        if negated {
            self.cursor.skip(1);
        }

        let first = out.len();
        loop {
            match self.cursor.peek() {
                None => return Err(ParseError::UnterminatedCharClass { offset: start }),
                Some(b']') => break,
                Some(_) => {
                    let codepoint = decode_char(&mut self.cursor)?;
                    let elem = if out.len() > first {
                        GrammarElement::char_alt(codepoint)
                    } else if negated {
                        GrammarElement::char_not(codepoint)
                    } else {
                        GrammarElement::char_match(codepoint)
                    };
                    out.push(elem);

                    // `a-b` range; a `-` directly before `]` is a literal
                    // member.
                    if self.cursor.peek() == Some(b'-')
                        && !matches!(self.cursor.peek_at(1), None | Some(b']'))
                    {
                        self.cursor.skip(1);
                        let upper = decode_char(&mut self.cursor)?;
                        out.push(GrammarElement::char_range_upper(upper));
                    }
                }
            }
        }
        self.cursor.skip(1); // closing bracket
        Ok(())
    }
}
