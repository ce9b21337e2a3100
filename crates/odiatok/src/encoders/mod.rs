//! # Token Encoders
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use odiatok::{
//!     OTResult,
//!     TokenEncoder,
//!     TokenType,
//!     TokenVocab,
//!     encoders::LongestMatchEncoder,
//! };
//!
//! fn example<T: TokenType>(
//!     vocab: Arc<TokenVocab<T>>,
//!     batch: &[&str],
//! ) -> OTResult<Vec<Vec<T>>> {
//!     let encoder = LongestMatchEncoder::from_vocab(vocab);
//!     encoder.try_encode_batch(batch)
//! }
//! ```

mod longest_match_encoder;
mod token_encoder;

#[doc(inline)]
pub use longest_match_encoder::LongestMatchEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
