//! # Word Span Buffer

use crate::training::utility::{SymbolId, SymbolPair, SymbolTable};

/// A mutable span of symbols (a "word").
///
/// Starts as one symbol per character; iteratively rewritten by merges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordSpanBuf {
    symbols: Vec<SymbolId>,
}

impl WordSpanBuf {
    /// Create a new span from symbols.
    pub fn from_symbols<S: AsRef<[SymbolId]>>(symbols: S) -> Self {
        Self {
            symbols: symbols.as_ref().to_vec(),
        }
    }

    /// Create a new span with one symbol per character of `word`.
    pub fn from_word(
        word: &str,
        table: &mut SymbolTable,
    ) -> Self {
        let mut buf = [0u8; 4];
        Self {
            symbols: word
                .chars()
                .map(|c| table.intern(c.encode_utf8(&mut buf)))
                .collect(),
        }
    }

    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate adjacent [`SymbolPair`]s, left to right.
    pub fn pairs(&self) -> impl Iterator<Item = SymbolPair> + '_ {
        self.symbols.windows(2).map(|w| (w[0], w[1]))
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`.
    ///
    /// Scans left to right; a merged symbol is never re-examined as the
    /// left half of another occurrence.
    ///
    /// ## Returns
    /// The number of occurrences merged.
    pub fn merge_pair(
        &mut self,
        pair: SymbolPair,
        replacement: SymbolId,
    ) -> usize {
        let n = self.symbols.len();
        if n < 2 {
            return 0;
        }

        let mut merged = 0;
        let mut new_symbols: Vec<SymbolId> = Vec::with_capacity(n);

        let mut i = 0;
        while i < n {
            if i + 1 < n && pair == (self.symbols[i], self.symbols[i + 1]) {
                new_symbols.push(replacement);
                merged += 1;
                i += 2;
            } else {
                new_symbols.push(self.symbols[i]);
                i += 1;
            }
        }

        if merged > 0 {
            self.symbols = new_symbols;
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word() {
        let mut table = SymbolTable::default();
        let span = WordSpanBuf::from_word("କକି", &mut table);
        assert_eq!(span.len(), 3);
        assert_eq!(span.symbols()[0], span.symbols()[1]);
        assert_eq!(table.len(), 2);

        let pairs: Vec<SymbolPair> = span.pairs().collect();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_merge_pair_non_overlapping() {
        // "aaa" with (a, a) -> X leaves "Xa", not "aX" or "XX".
        let mut span = WordSpanBuf::from_symbols([0, 0, 0]);
        assert_eq!(span.merge_pair((0, 0), 9), 1);
        assert_eq!(span.symbols(), &[9, 0]);

        let mut span = WordSpanBuf::from_symbols([1, 2, 3, 1, 2]);
        assert_eq!(span.merge_pair((1, 2), 7), 2);
        assert_eq!(span.symbols(), &[7, 3, 7]);

        let mut span = WordSpanBuf::from_symbols([1]);
        assert_eq!(span.merge_pair((1, 1), 7), 0);
        assert_eq!(span.symbols(), &[1]);
        assert!(!span.is_empty());
    }
}
