//! # Encode Reports

use crate::types::TokenType;

/// The compression ratio of an encoding.
///
/// ## Returns
/// ``chars(text) / token_count``; or `0.0` when `token_count` is zero.
pub fn compression_ratio(
    text: &str,
    token_count: usize,
) -> f64 {
    if token_count == 0 {
        return 0.0;
    }
    text.chars().count() as f64 / token_count as f64
}

/// The tokens for a text, with summary statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeReport<T: TokenType> {
    /// The encoded tokens.
    pub tokens: Vec<T>,

    /// The number of chars in the input text.
    pub char_count: usize,

    /// See [`compression_ratio`].
    pub compression_ratio: f64,
}

impl<T: TokenType> EncodeReport<T> {
    /// Build a report for `tokens` encoded from `text`.
    pub fn new(
        text: &str,
        tokens: Vec<T>,
    ) -> Self {
        Self {
            char_count: text.chars().count(),
            compression_ratio: compression_ratio(text, tokens.len()),
            tokens,
        }
    }

    /// The number of tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_ratio() {
        assert_eq!(compression_ratio("", 0), 0.0);
        assert_eq!(compression_ratio("abc", 0), 0.0);
        assert_eq!(compression_ratio("କଖଗଘ", 2), 2.0);
        assert_eq!(compression_ratio("କଖଗ", 2), 1.5);
    }

    #[test]
    fn test_report() {
        let report: EncodeReport<u32> = EncodeReport::new("କଖଗଘ", vec![81, 82]);
        assert_eq!(report.char_count, 4);
        assert_eq!(report.token_count(), 2);
        assert_eq!(report.compression_ratio, 2.0);

        let report: EncodeReport<u32> = EncodeReport::new("", vec![]);
        assert_eq!(report.compression_ratio, 0.0);
    }
}
