//! # Vocabulary IO
//!
//! Vocabularies persist as a flat JSON object of ``"id": "token"`` entries.
//!
//! ```rust,no_run
//! use odiatok::vocab::{TokenVocab, io::load_json_vocab_path};
//!
//! fn example() -> odiatok::OTResult<TokenVocab<u32>> {
//!     load_json_vocab_path("odia_tokenizer.json")
//! }
//! ```

mod json_vocab;

#[doc(inline)]
pub use json_vocab::*;
