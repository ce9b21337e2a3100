//! # Dictionary ``{ T -> String }`` Token Decoder

use std::sync::Arc;

use crate::{decoders::TokenDecoder, types::TokenType, vocab::TokenVocab};

/// A [`TokenDecoder<T>`] over a [`TokenVocab`] dictionary.
///
/// Ids absent from the vocab are silently dropped, never rendered as
/// `<UNK>`. Special ids are vocab entries, and decode to their literal
/// strings.
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    vocab: Arc<TokenVocab<T>>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Creates a new Decoder.
    ///
    /// ## Arguments
    /// * `vocab` - The token vocabulary.
    pub fn new(vocab: Arc<TokenVocab<T>>) -> Self {
        Self { vocab }
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<TokenVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    ) {
        for &token in tokens {
            match self.vocab.lookup_span(token) {
                Some(span) => buf.push_str(span),
                None => log::trace!("dropping unknown token {token}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type T = u32;

    fn decoder() -> DictionaryDecoder<T> {
        let vocab =
            TokenVocab::<T>::from_id_to_token([(1, "<UNK>"), (5, "କ"), (6, "ଖ"), (7, " ଗ")])
                .unwrap();
        DictionaryDecoder::new(Arc::new(vocab))
    }

    #[test]
    fn test_decode() {
        let decoder = decoder();
        assert_eq!(decoder.decode(&[]), "");
        assert_eq!(decoder.decode(&[5, 6, 7]), "କଖ ଗ");
        assert_eq!(decoder.decode(&[5, 1, 6]), "କ<UNK>ଖ");
    }

    #[test]
    fn test_unknown_ids_are_omitted() {
        let decoder = decoder();
        assert_eq!(decoder.decode(&[5, 999_999, 6]), decoder.decode(&[5, 6]));
        assert_eq!(decoder.decode(&[5, 999_999, 6]), "କଖ");
        assert_eq!(decoder.decode(&[0, 2, 3]), "");
    }

    #[test]
    fn test_decode_batch() {
        let decoder = decoder();
        let batch: [&[T]; 3] = [&[5], &[], &[7, 6]];
        assert_eq!(decoder.decode_batch(&batch), vec!["କ", "", " ଗଖ"]);

        let mut buf = String::from(">");
        decoder.decode_append(&[6], &mut buf);
        assert_eq!(buf, ">ଖ");
    }
}
