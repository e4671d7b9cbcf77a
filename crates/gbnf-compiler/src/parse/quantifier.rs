//! Repetition desugaring.
//!
//! A quantified atom becomes a reference to a synthesized rule that spells
//! the repetition out:
//!
//! - `X*` -> `R ::= X R |`
//! - `X+` -> `R ::= X R | X`
//! - `X?` -> `R ::= X |`
//!
//! The synthesized name is seeded from the enclosing rule's name; the
//! allocation-order suffix keeps it unique across the whole grammar.

use gbnf_grammar::GrammarElement;

use super::parser::Parser;

impl Parser<'_> {
    /// Rewrite the atom at `out[start..]` through a synthesized rule and
    /// replace it with a single reference to that rule.
    pub(super) fn desugar_quantifier(
        &mut self,
        op: u8,
        rule_name: &str,
        out: &mut Vec<GrammarElement>,
        start: usize,
    ) {
        let sub_id = self.grammar.symbols_mut().fresh_anonymous(rule_name);

        let mut sub_rule = out[start..].to_vec();
        if op == b'*' || op == b'+' {
            // Recursion carries the repetition.
            sub_rule.push(GrammarElement::rule_ref(sub_id));
        }
        sub_rule.push(GrammarElement::ALT);
        if op == b'+' {
            // One-or-more ends on the atom itself rather than empty.
            sub_rule.extend_from_slice(&out[start..]);
        }
        sub_rule.push(GrammarElement::END);
        self.grammar.set_rule(sub_id, sub_rule);

        out.truncate(start);
        out.push(GrammarElement::rule_ref(sub_id));
    }
}
