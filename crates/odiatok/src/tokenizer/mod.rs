//! # Combined Tokenizer

mod encode_report;
mod tokenizer_impl;

#[doc(inline)]
pub use encode_report::*;
#[doc(inline)]
pub use tokenizer_impl::*;
