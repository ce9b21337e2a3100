//! # Token Decoder Trait

use crate::types::TokenType;

/// Trait for token decoders.
///
/// Decoding never fails: ids with no token string are omitted.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target string buffer to append to.
    fn decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    );

    /// Decode tokens into a string.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        let mut buf = String::with_capacity(tokens.len() * 4);
        self.decode_append(tokens, &mut buf);
        buf
    }

    /// Decode a batch of tokens.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        batch.iter().map(|tokens| self.decode(tokens)).collect()
    }
}
