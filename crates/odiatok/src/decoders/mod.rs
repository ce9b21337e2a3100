//! # Token Decoders
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use odiatok::{TokenDecoder, TokenType, TokenVocab, decoders::DictionaryDecoder};
//!
//! fn example<T: TokenType>(
//!     vocab: Arc<TokenVocab<T>>,
//!     batch: &[&[T]],
//! ) -> Vec<String> {
//!     let decoder = DictionaryDecoder::new(vocab);
//!     decoder.decode_batch(batch)
//! }
//! ```

mod dictionary_decoder;
mod token_decoder;

#[doc(inline)]
pub use dictionary_decoder::DictionaryDecoder;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
