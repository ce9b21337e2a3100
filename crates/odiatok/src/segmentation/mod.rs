//! # Text Segmentation
//!
//! Splits raw text into the word-like units that training and encoding
//! operate on.
//!
//! * [`ODIA_WORD_PATTERN`] - the word split pattern.
//! * [`WordSegmentor`] - the compiled run-time segmentor.

mod odia_patterns;
mod word_segmentor;

#[doc(inline)]
pub use odia_patterns::{ODIA_BLOCK, ODIA_WORD_PATTERN};
#[doc(inline)]
pub use word_segmentor::WordSegmentor;
