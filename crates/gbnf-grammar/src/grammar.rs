//! Compiled grammar: the symbol table plus the rule table.
//!
//! Both tables are built once per compile and are immutable afterwards; the
//! caller owns the value and may hand it to any number of concurrent
//! readers. `set_rule` exists for the compiler and the binary decoder, which
//! construct the tables before releasing the value.

use crate::binary::ModuleError;
use crate::element::{ElementKind, GrammarElement, RuleId};
use crate::symbols::SymbolTable;

/// Name of the rule the sampling engine starts from.
pub const ROOT_RULE: &str = "root";

/// A compiled grammar.
///
/// Invariants once compilation has returned:
/// - every registered symbol ID indexes a slot in the rule table,
/// - each slot holds one or more alternatives separated by [`ElementKind::Alt`]
///   and terminated by exactly one [`ElementKind::End`].
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    symbols: SymbolTable,
    rules: Vec<Vec<GrammarElement>>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reassemble a grammar from its parts. Used by the binary decoder.
    pub fn from_parts(symbols: SymbolTable, rules: Vec<Vec<GrammarElement>>) -> Self {
        Self { symbols, rules }
    }

    #[inline]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    #[inline]
    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// Store rule `id`'s element sequence, growing the table so every
    /// allocated ID has a slot. Last write wins: redefining a rule name
    /// overwrites its previous definition silently.
    pub fn set_rule(&mut self, id: RuleId, elements: Vec<GrammarElement>) {
        let slot = id as usize;
        if self.rules.len() <= slot {
            self.rules.resize(slot + 1, Vec::new());
        }
        self.rules[slot] = elements;
    }

    /// Element sequence of rule `id`, if the slot exists.
    pub fn rule(&self, id: RuleId) -> Option<&[GrammarElement]> {
        self.rules.get(id as usize).map(|r| r.as_slice())
    }

    /// All rule slots, indexed by rule ID. This is the flat representation
    /// the sampling engine consumes.
    #[inline]
    pub fn rules(&self) -> &[Vec<GrammarElement>] {
        &self.rules
    }

    /// Number of rule slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// ID of the `root` rule, if one was registered.
    pub fn root_id(&self) -> Option<RuleId> {
        self.symbols.get(ROOT_RULE)
    }

    /// Name registered for `id`, if any.
    pub fn name_of(&self, id: RuleId) -> Option<&str> {
        self.symbols.name_of(id)
    }

    /// Structural check used by the binary decoder and tests.
    ///
    /// Verifies that the symbol and rule tables line up, that every rule is
    /// a properly `End`-terminated sequence, that rule references stay in
    /// range, and that range/class continuation elements follow a char
    /// element.
    pub fn validate(&self) -> Result<(), ModuleError> {
        if self.symbols.len() != self.rules.len() {
            return Err(ModuleError::TableMismatch {
                symbols: self.symbols.len(),
                rules: self.rules.len(),
            });
        }

        for (slot, rule) in self.rules.iter().enumerate() {
            let id = slot as RuleId;
            let malformed = |detail| ModuleError::MalformedRule { rule: id, detail };

            match rule.last() {
                None => return Err(malformed("empty rule slot")),
                Some(last) if last.kind != ElementKind::End => {
                    return Err(malformed("missing end marker"));
                }
                _ => {}
            }

            for (i, elem) in rule[..rule.len() - 1].iter().enumerate() {
                match elem.kind {
                    ElementKind::End => return Err(malformed("interior end marker")),
                    ElementKind::RuleRef => {
                        if elem.value as usize >= self.rules.len() {
                            return Err(malformed("rule reference out of range"));
                        }
                    }
                    ElementKind::CharRangeUpper | ElementKind::CharAlt => {
                        let follows_char = i > 0 && rule[i - 1].is_char_element();
                        if !follows_char {
                            return Err(malformed("class continuation outside a class"));
                        }
                    }
                    ElementKind::Alt | ElementKind::Char | ElementKind::CharNot => {}
                }
            }
        }

        Ok(())
    }
}
