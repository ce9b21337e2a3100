//! # Odia Word Patterns

use core::ops::RangeInclusive;

use crate::regex::ConstRegexPattern;

/// The Odia Unicode block.
pub const ODIA_BLOCK: RangeInclusive<char> = '\u{0B00}'..='\u{0B7F}';

/// The Odia word split pattern.
///
/// Alternatives, first match wins:
/// 1. optional space, an Odia run, then trailing non-space non-ASCII-alnum symbols;
/// 2. optional space, then a run of non-space non-ASCII-alnum symbols;
/// 3. whitespace not followed by a non-whitespace character;
/// 4. any remaining whitespace run.
///
/// ASCII letters and digits match no alternative, and are dropped.
pub const ODIA_WORD_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(
    " ?[\u{0B00}-\u{0B7F}]+[^\\sA-Za-z0-9]*| ?[^\\sA-Za-z0-9]+|\\s+(?!\\S)|\\s+",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles() {
        let re = ODIA_WORD_PATTERN.compile().unwrap();
        assert!(re.is_fancy());
    }

    #[test]
    fn test_block_bounds() {
        assert!(ODIA_BLOCK.contains(&'କ'));
        assert!(ODIA_BLOCK.contains(&'୍'));
        assert!(!ODIA_BLOCK.contains(&'।'));
        assert!(!ODIA_BLOCK.contains(&'a'));
    }
}
