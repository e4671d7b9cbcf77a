//! Human-readable grammar dump.
//!
//! Reconstructs `name ::= …` source text from the rule table, reassembling
//! char-element runs into `[...]` class syntax. Output is re-parseable:
//! printable ASCII is emitted raw, dialect escapes cover the rest, and
//! synthesized rule names have their `_` spelled as `-` (the dialect cannot
//! lex `_`). Intended for diagnostics and round-trip checks; the binary
//! rules, not this text, are the compilation contract.

use std::fmt::Write as _;

use crate::element::{ElementKind, GrammarElement, RuleId};
use crate::grammar::Grammar;

/// Dump every rule in ID order.
pub fn dump(grammar: &Grammar) -> String {
    let mut out = String::new();
    for id in 0..grammar.len() as RuleId {
        dump_rule(&mut out, grammar, id);
    }
    out
}

/// Dump a single rule as one `name ::= …` line.
pub fn dump_rule(out: &mut String, grammar: &Grammar, id: RuleId) {
    let Some(rule) = grammar.rule(id) else {
        return;
    };

    push_name(out, grammar, id);
    out.push_str(" ::= ");

    // The trailing End marker is structure, not syntax.
    let body = match rule.last() {
        Some(last) if last.kind == ElementKind::End => &rule[..rule.len() - 1],
        _ => rule,
    };

    for (i, elem) in body.iter().enumerate() {
        match elem.kind {
            ElementKind::End => {}
            ElementKind::Alt => out.push_str("| "),
            ElementKind::RuleRef => {
                push_name(out, grammar, elem.value);
                out.push(' ');
            }
            ElementKind::Char => {
                out.push('[');
                push_char(out, elem.value);
            }
            ElementKind::CharNot => {
                out.push_str("[^");
                push_char(out, elem.value);
            }
            ElementKind::CharRangeUpper => {
                out.push('-');
                push_char(out, elem.value);
            }
            ElementKind::CharAlt => push_char(out, elem.value),
        }
        if elem.is_char_element() && !continues_class(body, i) {
            out.push_str("] ");
        }
    }

    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn continues_class(body: &[GrammarElement], i: usize) -> bool {
    matches!(
        body.get(i + 1).map(|e| e.kind),
        Some(ElementKind::CharRangeUpper | ElementKind::CharAlt)
    )
}

fn push_name(out: &mut String, grammar: &Grammar, id: RuleId) {
    match grammar.name_of(id) {
        Some(name) => {
            for c in name.chars() {
                out.push(if c == '_' { '-' } else { c });
            }
        }
        None => {
            let _ = write!(out, "rule-{id}");
        }
    }
}

fn push_char(out: &mut String, codepoint: u32) {
    match codepoint {
        0x09 => out.push_str("\\t"),
        0x0A => out.push_str("\\n"),
        0x0D => out.push_str("\\r"),
        0x22 => out.push_str("\\\""),
        0x5C => out.push_str("\\\\"),
        0x5B => out.push_str("\\["),
        0x5D => out.push_str("\\]"),
        // '-' and '^' are class metacharacters; hex-escape keeps them inert.
        0x2D => out.push_str("\\x2D"),
        0x5E => out.push_str("\\x5E"),
        0x20..=0x7E => out.push(codepoint as u8 as char),
        0x00..=0xFF => {
            let _ = write!(out, "\\x{codepoint:02X}");
        }
        0x100..=0xFFFF => {
            let _ = write!(out, "\\u{codepoint:04X}");
        }
        _ => {
            let _ = write!(out, "\\U{codepoint:08X}");
        }
    }
}
