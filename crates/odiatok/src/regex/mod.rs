//! # Regex Utilities
//!
//! Mechanisms to mix `regex` and `fancy_regex` patterns behind one interface.

mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::{ConstRegexPattern, RegexPattern};
#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, MatchesWrapper, RegexWrapper};
