//! Binary grammar format and shared types for gbnf.
//!
//! This crate contains:
//! - Grammar element definitions (`ElementKind`, `GrammarElement`) with the
//!   frozen wire codes the sampling engine consumes
//! - The compiled grammar data model (`Grammar`, `SymbolTable`)
//! - The binary container format (`Header`, encode/decode, CRC32 checksum)
//! - A human-readable dump for diagnostics and round-trip checks

pub mod binary;
pub mod dump;
pub mod element;
pub mod grammar;
pub mod symbols;

#[cfg(test)]
mod element_tests;

pub use binary::{Header, MAGIC, ModuleError, VERSION};
pub use dump::{dump, dump_rule};
pub use element::{ElementKind, GrammarElement, RuleId};
pub use grammar::{Grammar, ROOT_RULE};
pub use symbols::SymbolTable;
