//! # Vocab Trainer

use crate::{
    errors::{OTResult, OdiaTokError},
    regex::RegexPattern,
    segmentation::{ODIA_WORD_PATTERN, WordSegmentor},
    training::utility::{OrderedCounter, SymbolPair, SymbolTable, WordCounter, WordSpanBuf},
    types::{TokenType, token_from_usize},
    vocab::TokenVocab,
};

/// Options for [`BpeTrainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct BpeTrainerOptions {
    /// The regex pattern used for text splitting.
    pub pattern: RegexPattern,

    /// The target vocab size, counting the special and base tokens.
    pub vocab_size: usize,
}

impl BpeTrainerOptions {
    /// Create new options, splitting with [`ODIA_WORD_PATTERN`].
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            pattern: ODIA_WORD_PATTERN.into(),
            vocab_size,
        }
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The desired vocabulary size; sizes at or below the
    ///   seeded vocabulary size train zero merges.
    ///
    /// ## Returns
    /// The updated `BpeTrainerOptions` instance.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the regex pattern used for text splitting.
    ///
    /// The pattern is compiled by [`init`](Self::init).
    ///
    /// ## Arguments
    /// * `pattern` - The new word split pattern.
    ///
    /// ## Returns
    /// The updated `BpeTrainerOptions` instance.
    pub fn with_pattern<P: Into<RegexPattern>>(
        self,
        pattern: P,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            ..self
        }
    }

    /// Initializes a [`BpeTrainer`] from these options.
    ///
    /// ## Returns
    /// A new `BpeTrainer`, or an error if the pattern fails to compile.
    pub fn init(self) -> OTResult<BpeTrainer> {
        BpeTrainer::new(self)
    }
}

/// Trainer for learning Odia subword vocabularies.
#[derive(Debug, Clone)]
pub struct BpeTrainer {
    /// Trainer options.
    pub options: BpeTrainerOptions,

    /// The corpus word counts.
    pub word_counter: WordCounter,
}

impl BpeTrainer {
    /// Initializes a [`BpeTrainer`].
    ///
    /// ## Arguments
    /// * `options` - The trainer options.
    pub fn new(options: BpeTrainerOptions) -> OTResult<Self> {
        let segmentor = WordSegmentor::from_pattern(options.pattern.clone())?;
        Ok(Self {
            options,
            word_counter: WordCounter::new(segmentor),
        })
    }

    /// Update word counts inplace from a corpus text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) -> OTResult<()> {
        self.word_counter.update_from_text(text)
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like samples.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) -> OTResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.word_counter.update_from_samples(samples)
    }

    /// Trains a [`TokenVocab<T>`].
    ///
    /// The resulting vocab holds the special tokens at ids 0-3, the base
    /// characters, and one token per new merged string, in merge order.
    ///
    /// ## Returns
    /// The trained vocab; or [`OdiaTokError::VocabSizeOverflow`] if
    /// `T` cannot hold the target vocab size.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train<T: TokenType>(self) -> OTResult<TokenVocab<T>> {
        let vocab_size = self.options.vocab_size;
        if vocab_size > 0 && token_from_usize::<T>(vocab_size - 1).is_err() {
            return Err(OdiaTokError::VocabSizeOverflow { size: vocab_size });
        }

        let mut vocab = TokenVocab::<T>::seeded()?;

        let num_merges = vocab_size.saturating_sub(vocab.len());
        log::info!("Starting BPE training: {} merges to compute", num_merges);
        log::info!(
            "Corpus: {} words ({} distinct)",
            self.word_counter.total_words(),
            self.word_counter.distinct_words()
        );

        let mut symbols = SymbolTable::default();
        let (mut words, word_counts): (Vec<WordSpanBuf>, Vec<usize>) = self
            .word_counter
            .iter()
            .map(|(word, count)| (WordSpanBuf::from_word(word, &mut symbols), count))
            .unzip();

        // ---- Merge loop ----
        let mut merges_done = 0;
        let mut last_log_percent = 0;

        while vocab.len() < vocab_size {
            let pair_counts = count_pairs(&words, &word_counts);
            let Some((&pair, count)) = pair_counts.first_max() else {
                log::info!("No pairs left to merge");
                break;
            };

            let merged = symbols.merge(pair);
            for word in words.iter_mut() {
                word.merge_pair(pair, merged);
            }

            let token = symbols.resolve(merged);
            if vocab.contains_token(token) {
                // The fragments are merged, but no new token is created.
                log::debug!("Merged {token:?} is already in the vocab");
                continue;
            }
            let id = vocab.push_token(token)?;
            log::debug!("Added token {token:?} with id {id} (frequency: {count})");

            merges_done += 1;

            // Log progress every 1%
            let current_percent = (merges_done * 100) / num_merges;
            if current_percent > last_log_percent {
                log::info!(
                    "Progress: {}% ({}/{} merges) - Last merge: {:?} -> {} (frequency: {})",
                    current_percent,
                    merges_done,
                    num_merges,
                    token,
                    id,
                    count
                );
                last_log_percent = current_percent;
            }
        }

        log::info!("Finished training: {} merges completed", merges_done);
        Ok(vocab)
    }
}

/// Count every adjacent pair, weighted by word count.
///
/// Entries are ordered by first occurrence: words in corpus order, pairs
/// left to right within each word.
fn count_pairs(
    words: &[WordSpanBuf],
    word_counts: &[usize],
) -> OrderedCounter<SymbolPair> {
    let mut pair_counts = OrderedCounter::default();
    for (word, &count) in words.iter().zip(word_counts) {
        for pair in word.pairs() {
            pair_counts.add(&pair, count);
        }
    }
    pair_counts
}

/// Train a vocabulary from a single corpus text.
///
/// ## Arguments
/// * `corpus` - The training text.
/// * `vocab_size` - The target vocabulary size.
pub fn train_vocab<T: TokenType>(
    corpus: &str,
    vocab_size: usize,
) -> OTResult<TokenVocab<T>> {
    let mut trainer = BpeTrainerOptions::new(vocab_size).init()?;
    trainer.update_from_text(corpus)?;
    trainer.train()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{BASE_VOCAB_SIZE, SPECIAL_TOKEN_COUNT};

    const SEEDED: usize = SPECIAL_TOKEN_COUNT + BASE_VOCAB_SIZE;

    #[test]
    fn test_trainer_options() {
        let options = BpeTrainerOptions::new(1000);
        assert_eq!(options.vocab_size, 1000);
        assert_eq!(options.pattern, ODIA_WORD_PATTERN.into());

        let options = options.with_vocab_size(2000).with_pattern(r"\S+");
        assert_eq!(options.vocab_size, 2000);
        assert_eq!(options.pattern, r"\S+".into());
    }

    #[test]
    fn test_trainer_options_bad_pattern() {
        assert!(BpeTrainerOptions::new(1000).with_pattern(r"(").init().is_err());
    }

    #[test]
    fn test_vocab_size_overflow() {
        let trainer = BpeTrainerOptions::new(300).init().unwrap();
        assert!(matches!(
            trainer.train::<u8>(),
            Err(OdiaTokError::VocabSizeOverflow { size: 300 })
        ));

        let trainer = BpeTrainerOptions::new(256).init().unwrap();
        assert_eq!(trainer.train::<u8>().unwrap().len(), SEEDED);
    }

    #[test]
    fn test_no_merges_at_seeded_size() {
        let seeded: TokenVocab<u32> = TokenVocab::seeded().unwrap();
        for vocab_size in [0, 10, SEEDED] {
            let vocab: TokenVocab<u32> = train_vocab("କକକକକକ କଖ", vocab_size).unwrap();
            assert_eq!(vocab, seeded);
        }
    }

    #[test]
    fn test_empty_corpus() {
        let vocab: TokenVocab<u32> = train_vocab("", 5000).unwrap();
        assert_eq!(vocab.len(), SEEDED);
    }

    #[test]
    fn test_repeated_bigram() {
        let vocab: TokenVocab<u32> = train_vocab("କକକକକକ", SEEDED + 1).unwrap();
        assert_eq!(vocab.len(), SEEDED + 1);
        assert_eq!(vocab.lookup_token("କକ"), Some(SEEDED as u32));

        // "କକକକକକ" -> [କକ, କକ, କକ] -> [କକକକ, କକ] -> [କକକକକକ]
        let vocab: TokenVocab<u32> = train_vocab("କକକକକକ", 5000).unwrap();
        assert_eq!(vocab.len(), SEEDED + 3);
        assert_eq!(vocab.lookup_span(SEEDED as u32 + 1), Some("କକକକ"));
        assert_eq!(vocab.lookup_span(SEEDED as u32 + 2), Some("କକକକକକ"));
    }

    #[test]
    fn test_first_seen_tie_break() {
        // (କ, ଖ), (' ', ଗ) and (ଗ, ଘ) all occur once.
        let vocab: TokenVocab<u32> = train_vocab("କଖ ଗଘ", SEEDED + 1).unwrap();
        assert_eq!(vocab.lookup_span(SEEDED as u32), Some("କଖ"));

        let vocab: TokenVocab<u32> = train_vocab("ଗଘ କଖ", SEEDED + 1).unwrap();
        assert_eq!(vocab.lookup_span(SEEDED as u32), Some("ଗଘ"));
    }

    #[test]
    fn test_counts_weight_repeated_words() {
        // "ଗଘ" occurs twice, so (ଗ, ଘ) beats the earlier (କ, ଖ).
        let vocab: TokenVocab<u32> = train_vocab("କଖ\nଗଘ\nଗଘ", SEEDED + 1).unwrap();
        assert_eq!(vocab.lookup_span(SEEDED as u32), Some("ଗଘ"));

        // (' ', ଗ) ties with (ଗ, ଘ), and is seen first.
        let vocab: TokenVocab<u32> = train_vocab("କଖ ଗଘ ଗଘ", SEEDED + 1).unwrap();
        assert_eq!(vocab.lookup_span(SEEDED as u32), Some(" ଗ"));
    }

    #[test]
    fn test_pairs_do_not_cross_words() {
        // Each word is a single char; there is nothing to merge.
        let vocab: TokenVocab<u32> = train_vocab("କ\nକ\nକ", 5000).unwrap();
        assert_eq!(vocab.len(), SEEDED);
    }

    #[test]
    fn test_non_base_chars_merge() {
        // ',' is not a base character, but takes part in merges.
        let vocab: TokenVocab<u32> = train_vocab("କ, କ, କ,", SEEDED + 1).unwrap();
        assert_eq!(vocab.lookup_span(SEEDED as u32), Some("କ,"));
    }

    #[test]
    fn test_trained_vocab_is_dense() {
        let corpus = "ଓଡ଼ିଆ ଭାଷା ଏକ ପ୍ରାଚୀନ ଭାଷା। ଓଡ଼ିଶାର ଲୋକମାନେ ଓଡ଼ିଆ କୁହନ୍ତି।\n";
        let vocab: TokenVocab<u32> = train_vocab(&corpus.repeat(3), 140).unwrap();

        assert!(vocab.len() > SEEDED);
        assert!(vocab.len() <= 140);
        vocab.validate_specials().unwrap();

        for (idx, (id, token)) in vocab.ordered_entries().into_iter().enumerate() {
            assert_eq!(id as usize, idx);
            assert!(!token.is_empty());
            assert_eq!(vocab.lookup_token(token), Some(id));
        }
    }

    #[test]
    fn test_update_from_samples_matches_text() {
        let mut trainer = BpeTrainerOptions::new(SEEDED + 4).init().unwrap();
        trainer.update_from_samples(["କକ ଖଖ", " କକ"]).unwrap();
        let sampled: TokenVocab<u16> = trainer.train().unwrap();

        let joined: TokenVocab<u16> = train_vocab("କକ ଖଖ କକ", SEEDED + 4).unwrap();
        assert_eq!(sampled, joined);
    }
}
