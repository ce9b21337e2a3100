//! # Token Encoder Trait

use std::sync::Arc;

use crate::{errors::OTResult, segmentation::WordSegmentor, types::TokenType};

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached word segmentor.
    ///
    /// ## Returns
    /// A reference to the internal `WordSegmentor` arc.
    fn segmentor(&self) -> &Arc<WordSegmentor>;

    /// Encode a single segmented word, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `word` - The word to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_word(
        &self,
        word: &str,
        tokens: &mut Vec<T>,
    );

    /// Encode text into tokens, appending to a target buffer.
    ///
    /// Text which the segmentor skips produces no tokens.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> OTResult<()> {
        self.segmentor()
            .for_each_word(text, |word| self.encode_append_word(word, tokens))
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A `Result` containing the vector of tokens or an error.
    fn try_encode(
        &self,
        text: &str,
    ) -> OTResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(text.len() / 4);
        self.try_encode_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A `Result` containing the vector of token vectors or an error.
    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> OTResult<Vec<Vec<T>>> {
        batch.iter().map(|s| self.try_encode(s)).collect()
    }
}
