//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from odiatok operations.
#[derive(Debug, thiserror::Error)]
pub enum OdiaTokError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data breaks the token/id bijection.
    #[error("{0}")]
    VocabConflict(String),

    /// Tokens must be non-empty strings.
    #[error("empty token string for id {id}")]
    EmptyToken {
        /// The id the empty token was assigned to.
        id: u64,
    },

    /// A reserved special id does not hold its special token.
    #[error("reserved id {id} must map to {expected:?}")]
    MissingSpecial {
        /// The reserved id.
        id: u64,

        /// The special token string expected at that id.
        expected: &'static str,
    },

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// Regex compilation or matching failure.
    #[error(transparent)]
    Regex(#[from] ErrorWrapper),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed vocabulary JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Parse error (integer ids, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for odiatok operations.
pub type OTResult<T> = core::result::Result<T, OdiaTokError>;
