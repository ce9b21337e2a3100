//! # Training Symbol Table

use crate::types::OTHashMap;

/// An interned fragment string.
pub type SymbolId = usize;

/// An ordered pair of adjacent symbols.
pub type SymbolPair = (SymbolId, SymbolId);

/// Interns the fragment strings seen during training.
///
/// Fragments need not be vocabulary tokens: characters outside the
/// base set still take part in pair counting and merging.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<String>,
    index: OTHashMap<String, SymbolId>,
}

impl SymbolTable {
    /// Get the id for `text`, interning it if new.
    pub fn intern(
        &mut self,
        text: &str,
    ) -> SymbolId {
        if let Some(&id) = self.index.get(text) {
            return id;
        }
        let id = self.symbols.len();
        self.symbols.push(text.to_string());
        self.index.insert(text.to_string(), id);
        id
    }

    /// Get the string for a symbol.
    ///
    /// ## Panics
    /// If `id` was not produced by this table.
    pub fn resolve(
        &self,
        id: SymbolId,
    ) -> &str {
        &self.symbols[id]
    }

    /// Intern the concatenation of a pair.
    pub fn merge(
        &mut self,
        (a, b): SymbolPair,
    ) -> SymbolId {
        let merged = [self.resolve(a), self.resolve(b)].concat();
        self.intern(&merged)
    }

    /// The number of interned symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_merge() {
        let mut table = SymbolTable::default();
        assert!(table.is_empty());

        let ka = table.intern("କ");
        let i = table.intern("ି");
        assert_eq!(table.intern("କ"), ka);
        assert_eq!(table.len(), 2);

        let ki = table.merge((ka, i));
        assert_eq!(table.resolve(ki), "କି");
        assert_eq!(table.merge((ka, i)), ki);
        assert_eq!(table.len(), 3);
    }
}
