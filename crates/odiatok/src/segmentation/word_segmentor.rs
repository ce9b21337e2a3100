//! # Word Segmentor

use crate::{
    errors::OTResult,
    regex::{RegexPattern, RegexWrapper},
    segmentation::ODIA_WORD_PATTERN,
};

/// Regex-driven word segmentor.
///
/// Text not covered by any match is skipped, and never reported.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSegmentor {
    word_re: RegexWrapper,
}

impl Default for WordSegmentor {
    fn default() -> Self {
        Self::odia()
    }
}

impl From<RegexWrapper> for WordSegmentor {
    fn from(word_re: RegexWrapper) -> Self {
        Self { word_re }
    }
}

impl WordSegmentor {
    /// Build the segmentor for [`ODIA_WORD_PATTERN`].
    pub fn odia() -> Self {
        match ODIA_WORD_PATTERN.compile() {
            Ok(word_re) => Self { word_re },
            Err(err) => unreachable!("ODIA_WORD_PATTERN failed to compile: {err}"),
        }
    }

    /// Build a segmentor from a word split pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The word split pattern.
    pub fn from_pattern<P>(pattern: P) -> OTResult<Self>
    where
        P: Into<RegexPattern>,
    {
        Ok(Self {
            word_re: pattern.into().compile()?,
        })
    }

    /// Get the word split regex.
    pub fn word_regex(&self) -> &RegexWrapper {
        &self.word_re
    }

    /// Visit every word of `text`, in order.
    ///
    /// ## Arguments
    /// * `text` - the text to split.
    /// * `f` - called with each word slice.
    pub fn for_each_word<'h, F>(
        &self,
        text: &'h str,
        mut f: F,
    ) -> OTResult<()>
    where
        F: FnMut(&'h str),
    {
        for range in self.word_re.find_iter(text) {
            f(&text[range?]);
        }
        Ok(())
    }

    /// Split `text` into words.
    ///
    /// ## Returns
    /// The words, as slices of `text`, in order.
    pub fn segment<'h>(
        &self,
        text: &'h str,
    ) -> OTResult<Vec<&'h str>> {
        let mut words = Vec::new();
        self.for_each_word(text, |word| words.push(word))?;
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<&str> {
        WordSegmentor::default().segment(text).unwrap()
    }

    #[test]
    fn test_empty() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_words_take_leading_space() {
        assert_eq!(segment("ଓଡ଼ିଶା ପ୍ରଦେଶ"), vec!["ଓଡ଼ିଶା", " ପ୍ରଦେଶ"]);
    }

    #[test]
    fn test_attached_punctuation() {
        assert_eq!(
            segment("ଦୁର୍ଦ୍ଦଶା, ଗଠନ।"),
            vec!["ଦୁର୍ଦ୍ଦଶା,", " ଗଠନ।"]
        );
    }

    #[test]
    fn test_symbol_runs() {
        assert_eq!(segment("«» ,,"), vec!["«»", " ,,"]);
    }

    #[test]
    fn test_whitespace_runs() {
        // The last space of a run is left for the following word.
        assert_eq!(segment("କ   ଖ"), vec!["କ", "  ", " ଖ"]);
        assert_eq!(segment("କ\nଖ"), vec!["କ", "\n", "ଖ"]);
        assert_eq!(segment("କ  "), vec!["କ", "  "]);
        assert_eq!(segment("\t\n"), vec!["\t\n"]);
    }

    #[test]
    fn test_ascii_alnum_dropped() {
        assert!(segment("abc123").is_empty());
        assert_eq!(segment("abc 123"), vec![" "]);
        assert_eq!(segment("କabcଖ"), vec!["କ", "ଖ"]);
        assert_eq!(segment("ଗ 2024 ଘ"), vec!["ଗ", " ", " ଘ"]);
    }

    #[test]
    fn test_custom_pattern() {
        let segmentor = WordSegmentor::from_pattern(r"\w+").unwrap();
        assert!(segmentor.word_regex().is_basic());
        assert_eq!(segmentor.segment("ab cd").unwrap(), vec!["ab", "cd"]);
        assert!(WordSegmentor::from_pattern("(").is_err());
    }
}
