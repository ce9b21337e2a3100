//! # Training Utilities

mod ordered_counter;
mod symbol_table;
mod word_counter;
mod word_span_buffer;

#[doc(inline)]
pub use ordered_counter::OrderedCounter;
#[doc(inline)]
pub use symbol_table::{SymbolId, SymbolPair, SymbolTable};
#[doc(inline)]
pub use word_counter::WordCounter;
#[doc(inline)]
pub use word_span_buffer::WordSpanBuf;
