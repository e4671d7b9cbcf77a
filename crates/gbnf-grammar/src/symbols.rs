//! Rule name to rule ID mapping.
//!
//! Names get dense IDs in first-seen order, so the table doubles as the
//! reverse index the printer needs. Synthesized rule names embed the
//! allocation counter after an underscore; the grammar dialect does not
//! allow underscores in identifiers, so a declared name can never collide
//! with a synthesized one.

use indexmap::IndexMap;

use crate::element::RuleId;

/// Insertion-ordered map from rule name to dense rule ID.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    ids: IndexMap<String, RuleId>,
    /// Next ID to allocate. Kept separate from `ids.len()` so edits to the
    /// map can never skew allocation.
    next_id: RuleId,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID for `name`, allocating the next sequential ID on first sight.
    /// Idempotent: the same name always maps to the same ID.
    pub fn id_for(&mut self, name: &str) -> RuleId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.ids.insert(name.to_owned(), id);
        id
    }

    /// Register a synthesized rule named `{base}_{id}`, where `id` is the ID
    /// being allocated.
    pub fn fresh_anonymous(&mut self, base: &str) -> RuleId {
        let id = self.next_id;
        self.next_id += 1;
        self.ids.insert(format!("{base}_{id}"), id);
        id
    }

    /// Name registered for `id`, if any.
    ///
    /// IDs are allocated in insertion order, so the map index is the ID.
    pub fn name_of(&self, id: RuleId) -> Option<&str> {
        self.ids.get_index(id as usize).map(|(name, _)| name.as_str())
    }

    /// ID of `name`, without registering it.
    #[inline]
    pub fn get(&self, name: &str) -> Option<RuleId> {
        self.ids.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Number of registered names.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate `(name, id)` pairs in insertion (= ID) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RuleId)> {
        self.ids.iter().map(|(name, &id)| (name.as_str(), id))
    }

    /// Emit the name table as a blob and offset table.
    ///
    /// Returns (concatenated UTF-8 bytes, offset for each name + sentinel).
    /// The offsets array has `len() + 1` entries; the last is the blob size.
    pub fn to_blob(&self) -> (Vec<u8>, Vec<u32>) {
        let mut blob = Vec::new();
        let mut offsets = Vec::with_capacity(self.ids.len() + 1);

        for (name, _) in self.ids.iter() {
            offsets.push(blob.len() as u32);
            blob.extend_from_slice(name.as_bytes());
        }
        offsets.push(blob.len() as u32); // sentinel for length calculation

        (blob, offsets)
    }

    /// Rebuild a table from names in ID order. Used by the binary decoder.
    pub fn from_names(names: Vec<String>) -> Self {
        let mut table = Self::new();
        for name in names {
            let id = table.next_id;
            table.next_id += 1;
            table.ids.insert(name, id);
        }
        table
    }
}
