//! # Word Counter

use crate::{
    errors::OTResult,
    segmentation::WordSegmentor,
    training::utility::OrderedCounter,
};

/// Counts segmented words, in first-occurrence order.
#[derive(Debug, Clone)]
pub struct WordCounter {
    /// The word segmentor.
    pub segmentor: WordSegmentor,

    /// The word counts.
    pub word_counts: OrderedCounter<String>,
}

impl WordCounter {
    /// Create a new word counter.
    pub fn new(segmentor: WordSegmentor) -> Self {
        Self {
            segmentor,
            word_counts: OrderedCounter::with_capacity(10_000),
        }
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) -> OTResult<()> {
        let word_counts = &mut self.word_counts;
        self.segmentor
            .for_each_word(text.as_ref(), |word| word_counts.add(word, 1))
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) -> OTResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample)?;
        }
        Ok(())
    }

    /// Iterate ``(word, count)`` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.word_counts.iter().map(|(k, n)| (k.as_str(), n))
    }

    /// The number of distinct words.
    pub fn distinct_words(&self) -> usize {
        self.word_counts.len()
    }

    /// The total number of words seen.
    pub fn total_words(&self) -> usize {
        self.word_counts.total()
    }
}
