//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! * [`SpecialToken`] - the four reserved tokens, at ids `0..4`.
//! * [`base_vocab`] - the fixed Odia single-character seed set, at ids `4..`.
//! * [`TokenVocab`] - the bidirectional ``{ String <-> T }`` token table.
//! * [`io`] - JSON vocabulary persistence.

pub mod base_vocab;
pub mod io;
pub mod special_vocab;
pub mod token_vocab;

#[doc(inline)]
pub use base_vocab::{BASE_VOCAB_SIZE, ODIA_BASE_CHARS};
#[doc(inline)]
pub use special_vocab::{SPECIAL_TOKEN_COUNT, SpecialToken};
#[doc(inline)]
pub use token_vocab::TokenVocab;
