//! # Token Vocabulary

use crate::{
    errors::{OTResult, OdiaTokError},
    types::{OTHashMap, TokenType, token_from_usize, token_to_u64},
    vocab::{SpecialToken, base_vocab::base_entries},
};

/// A bidirectional ``{ String <-> T }`` token table.
///
/// Every insertion is checked, so the table is always a bijection:
/// no two tokens share an id, and no token has two ids.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    token_to_id: OTHashMap<String, T>,
    id_to_token: OTHashMap<T, String>,

    /// The length, in chars, of the longest token.
    max_token_chars: usize,
}

impl<T: TokenType> Default for TokenVocab<T> {
    fn default() -> Self {
        Self {
            token_to_id: Default::default(),
            id_to_token: Default::default(),
            max_token_chars: 0,
        }
    }
}

impl<T: TokenType> TokenVocab<T> {
    /// Build the seed vocabulary: the special tokens, then the base characters.
    pub fn seeded() -> OTResult<Self> {
        let mut vocab = Self::default();
        for (id, token) in SpecialToken::entries::<T>() {
            vocab.try_insert(id, token)?;
        }
        for (id, c) in base_entries() {
            vocab.try_insert(token_from_usize(id)?, c.to_string())?;
        }
        Ok(vocab)
    }

    /// Build a vocabulary from ``(id, token)`` entries.
    ///
    /// ## Returns
    /// An error if any entry breaks the bijection.
    pub fn from_id_to_token<I, S>(entries: I) -> OTResult<Self>
    where
        I: IntoIterator<Item = (T, S)>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        for (id, token) in entries {
            vocab.try_insert(id, token)?;
        }
        Ok(vocab)
    }

    /// Insert a token at a given id.
    ///
    /// ## Returns
    /// An error, leaving the vocab unchanged, if the token is empty,
    /// the id is taken, or the token already has an id.
    pub fn try_insert<S: Into<String>>(
        &mut self,
        id: T,
        token: S,
    ) -> OTResult<()> {
        let token = token.into();
        if token.is_empty() {
            return Err(OdiaTokError::EmptyToken {
                id: token_to_u64(id),
            });
        }
        if let Some(existing) = self.id_to_token.get(&id) {
            return Err(OdiaTokError::VocabConflict(format!(
                "id {id} is already assigned to {existing:?}; cannot assign {token:?}"
            )));
        }
        if let Some(existing) = self.token_to_id.get(&token) {
            return Err(OdiaTokError::VocabConflict(format!(
                "token {token:?} already has id {existing}; cannot assign {id}"
            )));
        }

        self.max_token_chars = self.max_token_chars.max(token.chars().count());
        self.token_to_id.insert(token.clone(), id);
        self.id_to_token.insert(id, token);
        Ok(())
    }

    /// The id [`push_token`](Self::push_token) would assign next.
    pub fn next_token(&self) -> OTResult<T> {
        match self.max_token() {
            None => Ok(T::zero()),
            Some(max) => max.checked_add(&T::one()).ok_or(OdiaTokError::TokenOutOfRange),
        }
    }

    /// Append a token at the next sequential id.
    ///
    /// ## Returns
    /// The assigned id.
    pub fn push_token<S: Into<String>>(
        &mut self,
        token: S,
    ) -> OTResult<T> {
        let id = self.next_token()?;
        self.try_insert(id, token)?;
        Ok(id)
    }

    /// Check that every reserved id holds its special token.
    pub fn validate_specials(&self) -> OTResult<()> {
        for special in SpecialToken::ALL {
            if self.lookup_span(special.id()) != Some(special.as_str()) {
                return Err(OdiaTokError::MissingSpecial {
                    id: special.index() as u64,
                    expected: special.as_str(),
                });
            }
        }
        Ok(())
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Is the vocab empty?
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// The largest assigned id, if any.
    pub fn max_token(&self) -> Option<T> {
        self.id_to_token.keys().max().copied()
    }

    /// The length, in chars, of the longest token.
    pub fn max_token_chars(&self) -> usize {
        self.max_token_chars
    }

    /// The reserved `<UNK>` id.
    pub fn unk_token(&self) -> T {
        SpecialToken::Unk.id()
    }

    /// Return the id for a token string, if any.
    pub fn lookup_token(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_id.get(token).copied()
    }

    /// Return the token string for an id, if any.
    pub fn lookup_span(
        &self,
        id: T,
    ) -> Option<&str> {
        self.id_to_token.get(&id).map(String::as_str)
    }

    /// Is `token` in the vocab?
    pub fn contains_token(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// All ``(id, token)`` entries, in ascending id order.
    pub fn ordered_entries(&self) -> Vec<(T, &str)> {
        let mut entries: Vec<(T, &str)> = self
            .id_to_token
            .iter()
            .map(|(&id, token)| (id, token.as_str()))
            .collect();
        entries.sort_unstable_by_key(|&(id, _)| id);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{BASE_VOCAB_SIZE, SPECIAL_TOKEN_COUNT};

    #[test]
    fn test_seeded() {
        let vocab: TokenVocab<u32> = TokenVocab::seeded().unwrap();
        assert_eq!(vocab.len(), SPECIAL_TOKEN_COUNT + BASE_VOCAB_SIZE);
        vocab.validate_specials().unwrap();

        assert_eq!(vocab.lookup_span(0), Some("<PAD>"));
        assert_eq!(vocab.lookup_span(1), Some("<UNK>"));
        assert_eq!(vocab.lookup_token("ଅ"), Some(4));
        assert_eq!(vocab.lookup_token("-"), Some(80));
        assert_eq!(vocab.max_token(), Some(80));
        assert_eq!(vocab.next_token().unwrap(), 81);
        assert_eq!(vocab.unk_token(), 1);
        assert_eq!(vocab.max_token_chars(), 5);
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut vocab: TokenVocab<u16> = TokenVocab::default();
        vocab.try_insert(5, "କ").unwrap();

        assert!(matches!(
            vocab.try_insert(5, "ଖ"),
            Err(OdiaTokError::VocabConflict(_))
        ));
        assert!(matches!(
            vocab.try_insert(6, "କ"),
            Err(OdiaTokError::VocabConflict(_))
        ));
        assert!(matches!(
            vocab.try_insert(7, ""),
            Err(OdiaTokError::EmptyToken { id: 7 })
        ));

        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.lookup_span(5), Some("କ"));
        assert_eq!(vocab.lookup_token("ଖ"), None);
    }

    #[test]
    fn test_push_token() {
        let mut vocab: TokenVocab<u32> = TokenVocab::default();
        assert_eq!(vocab.push_token("କ").unwrap(), 0);
        assert_eq!(vocab.push_token("କି").unwrap(), 1);
        assert_eq!(vocab.max_token_chars(), 2);
        assert!(vocab.contains_token("କି"));
        assert!(vocab.push_token("କ").is_err());

        let mut full: TokenVocab<u8> = TokenVocab::default();
        full.try_insert(u8::MAX, "x").unwrap();
        assert!(matches!(
            full.push_token("y"),
            Err(OdiaTokError::TokenOutOfRange)
        ));
    }

    #[test]
    fn test_validate_specials() {
        let vocab: TokenVocab<u32> =
            TokenVocab::from_id_to_token([(0, "<PAD>"), (1, "କ"), (2, "<BOS>"), (3, "<EOS>")])
                .unwrap();
        assert!(matches!(
            vocab.validate_specials(),
            Err(OdiaTokError::MissingSpecial { id: 1, .. })
        ));
    }

    #[test]
    fn test_ordered_entries() {
        let vocab: TokenVocab<u32> =
            TokenVocab::from_id_to_token([(10, "ଖ"), (2, "କ"), (7, "ଗ")]).unwrap();
        assert_eq!(vocab.ordered_entries(), vec![(2, "କ"), (7, "ଗ"), (10, "ଖ")]);
    }
}
