//! # Vocabulary Training
//!
//! Support for training Odia subword vocabularies.
//!
//! Training:
//! * segments the corpus with a [`crate::segmentation::WordSegmentor`],
//! * seeds a [`crate::vocab::TokenVocab`] with the special tokens and
//!   the base characters,
//! * then repeatedly merges the most frequent adjacent fragment pair.
//!
//! Only the flat token table is kept; the merge order is not persisted.
//! Encoding relies on every trained token being a literal substring
//! reachable by greedy longest match.
//!
//! ## Training Example
//!
//! ```rust,no_run
//! use odiatok::{
//!     OTResult,
//!     TokenVocab,
//!     training::BpeTrainerOptions,
//!     vocab::io::save_json_vocab_path,
//! };
//!
//! fn example<I, S>(
//!     vocab_size: usize,
//!     samples: I,
//! ) -> OTResult<TokenVocab<u32>>
//! where
//!     I: IntoIterator<Item = S>,
//!     S: AsRef<str>,
//! {
//!     let mut trainer = BpeTrainerOptions::new(vocab_size).init()?;
//!     trainer.update_from_samples(samples)?;
//!
//!     let vocab = trainer.train::<u32>()?;
//!     save_json_vocab_path(&vocab, "odia_tokenizer.json")?;
//!     Ok(vocab)
//! }
//! ```

pub mod utility;

mod bpe_trainer;

#[doc(inline)]
pub use bpe_trainer::{BpeTrainer, BpeTrainerOptions, train_vocab};
