//! # Greedy Longest-Match Encoder

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    segmentation::WordSegmentor,
    types::TokenType,
    vocab::TokenVocab,
};

/// A [`TokenEncoder`] using greedy longest-match dictionary lookup.
///
/// At each position of a word, the longest substring present in the
/// vocab is emitted; when not even the single character is present,
/// the `<UNK>` id is emitted and the cursor advances one character.
///
/// This is not a replay of the training merges; it agrees with them
/// only for vocabs whose tokens are reachable by the greedy strategy,
/// which every trained vocab is.
#[derive(Debug, Clone)]
pub struct LongestMatchEncoder<T: TokenType> {
    vocab: Arc<TokenVocab<T>>,
    segmentor: Arc<WordSegmentor>,
}

impl<T: TokenType> LongestMatchEncoder<T> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The token vocabulary.
    /// * `segmentor` - The word segmentor.
    pub fn new(
        vocab: Arc<TokenVocab<T>>,
        segmentor: Arc<WordSegmentor>,
    ) -> Self {
        Self { vocab, segmentor }
    }

    /// Create a new encoder using the default Odia segmentor.
    pub fn from_vocab(vocab: Arc<TokenVocab<T>>) -> Self {
        Self::new(vocab, Arc::new(WordSegmentor::default()))
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<TokenVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenEncoder<T> for LongestMatchEncoder<T> {
    fn segmentor(&self) -> &Arc<WordSegmentor> {
        &self.segmentor
    }

    fn encode_append_word(
        &self,
        word: &str,
        tokens: &mut Vec<T>,
    ) {
        // Byte offsets of every char boundary, including the end.
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(word.len()))
            .collect();
        let n = bounds.len() - 1;

        // No token is longer than this; longer candidates cannot match.
        let max_chars = self.vocab.max_token_chars();

        let mut i = 0;
        while i < n {
            let longest = (n - i).min(max_chars);
            let found = (1..=longest).rev().find_map(|len| {
                self.vocab
                    .lookup_token(&word[bounds[i]..bounds[i + len]])
                    .map(|token| (token, len))
            });

            match found {
                Some((token, len)) => {
                    tokens.push(token);
                    i += len;
                }
                None => {
                    log::trace!("no token for {:?}", &word[bounds[i]..bounds[i + 1]]);
                    tokens.push(self.vocab.unk_token());
                    i += 1;
                }
            }
        }
    }
}
