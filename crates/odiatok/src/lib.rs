//! # `odiatok` Odia Subword Tokenizer
//!
//! A byte-pair-encoding style subword tokenizer for Odia text.
//!
//! See:
//! * [`segmentation`] to split raw text into words.
//! * [`training`] to train a [`vocab::TokenVocab`] from a corpus.
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`vocab`] to manage token vocabularies and vocab io.
//! * [`tokenizer`] for the combined [`Tokenizer`].
//!
//! ## Crate Features
//!
//! #### feature: ``foldhash``
//!
//! This swaps all HashMap/HashSet implementations for ``foldhash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::OTHash{*}`` type alias machinery.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Training and Using a Tokenizer
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use odiatok::{
//!     OTResult,
//!     TokenDecoder,
//!     TokenEncoder,
//!     Tokenizer,
//!     training::BpeTrainerOptions,
//!     vocab::io::save_json_vocab_path,
//! };
//!
//! fn example(corpus: &str) -> OTResult<()> {
//!     let mut trainer = BpeTrainerOptions::new(5000).init()?;
//!     trainer.update_from_text(corpus)?;
//!
//!     let vocab = trainer.train::<u32>()?;
//!     save_json_vocab_path(&vocab, "odia_tokenizer.json")?;
//!
//!     let tokenizer = Tokenizer::from_vocab(Arc::new(vocab));
//!     let tokens = tokenizer.try_encode("ଓଡ଼ିଶା ପ୍ରଦେଶ")?;
//!     let text = tokenizer.decode(&tokens);
//!     println!("{tokens:?} -> {text}");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod regex;
pub mod segmentation;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{OTResult, OdiaTokError};
#[doc(inline)]
pub use tokenizer::{EncodeReport, Tokenizer, compression_ratio};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SpecialToken, TokenVocab};
