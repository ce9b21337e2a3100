//! # Tokenizer

use std::{path::Path, sync::Arc};

use crate::{
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::{LongestMatchEncoder, TokenEncoder},
    errors::OTResult,
    segmentation::WordSegmentor,
    tokenizer::EncodeReport,
    types::TokenType,
    vocab::{TokenVocab, io::load_json_vocab_path},
};

/// Unified Tokenizer.
///
/// Combines:
///  * [`TokenVocab`],
///  * [`TokenEncoder`], and
///  * [`TokenDecoder`] wrappers.
///
/// The vocab is immutable once built; a `Tokenizer` can be cloned and
/// shared across threads without locking.
#[derive(Clone)]
pub struct Tokenizer<T: TokenType> {
    vocab: Arc<TokenVocab<T>>,
    encoder: Arc<dyn TokenEncoder<T>>,
    decoder: Arc<dyn TokenDecoder<T>>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a new tokenizer.
    pub fn new(
        vocab: Arc<TokenVocab<T>>,
        encoder: Arc<dyn TokenEncoder<T>>,
        decoder: Arc<dyn TokenDecoder<T>>,
    ) -> Self {
        Self {
            vocab,
            encoder,
            decoder,
        }
    }

    /// Create the default tokenizer for a vocab.
    ///
    /// Uses a [`LongestMatchEncoder`] and a [`DictionaryDecoder`].
    pub fn from_vocab(vocab: Arc<TokenVocab<T>>) -> Self {
        let segmentor = Arc::new(WordSegmentor::default());
        Self::new(
            vocab.clone(),
            Arc::new(LongestMatchEncoder::new(vocab.clone(), segmentor)),
            Arc::new(DictionaryDecoder::new(vocab)),
        )
    }

    /// Load a JSON vocab file, and build the default tokenizer for it.
    ///
    /// ## Arguments
    /// * `path` - The vocab file path.
    pub fn load_json_path<P: AsRef<Path>>(path: P) -> OTResult<Self> {
        let vocab = load_json_vocab_path(path)?;
        Ok(Self::from_vocab(Arc::new(vocab)))
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<TokenVocab<T>> {
        &self.vocab
    }

    /// Get the underlying encoder.
    pub fn encoder(&self) -> &Arc<dyn TokenEncoder<T>> {
        &self.encoder
    }

    /// Get the underlying decoder.
    pub fn decoder(&self) -> &Arc<dyn TokenDecoder<T>> {
        &self.decoder
    }

    /// Encode text, and summarize the encoding.
    pub fn encode_report(
        &self,
        text: &str,
    ) -> OTResult<EncodeReport<T>> {
        let tokens = self.try_encode(text)?;
        Ok(EncodeReport::new(text, tokens))
    }
}

impl<T: TokenType> TokenEncoder<T> for Tokenizer<T> {
    fn segmentor(&self) -> &Arc<WordSegmentor> {
        self.encoder.segmentor()
    }

    fn encode_append_word(
        &self,
        word: &str,
        tokens: &mut Vec<T>,
    ) {
        self.encoder.encode_append_word(word, tokens)
    }

    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> OTResult<()> {
        self.encoder.try_encode_append(text, tokens)
    }

    fn try_encode(
        &self,
        text: &str,
    ) -> OTResult<Vec<T>> {
        self.encoder.try_encode(text)
    }

    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> OTResult<Vec<Vec<T>>> {
        self.encoder.try_encode_batch(batch)
    }
}

impl<T: TokenType> TokenDecoder<T> for Tokenizer<T> {
    fn decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    ) {
        self.decoder.decode_append(tokens, buf)
    }

    fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        self.decoder.decode(tokens)
    }

    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        self.decoder.decode_batch(batch)
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;
    use crate::vocab::io::save_json_vocab_path;

    type T = u32;

    fn static_is_send_sync_check<S: Send + Sync>(_: &S) {}

    #[test]
    fn test_seeded_tokenizer() {
        let vocab = Arc::new(TokenVocab::seeded().unwrap());
        let tokenizer: Tokenizer<T> = Tokenizer::from_vocab(vocab);
        static_is_send_sync_check(&tokenizer);

        let text = "ଓଡ଼ିଶା ପ୍ରଦେଶ";
        let tokens = tokenizer.try_encode(text).unwrap();
        assert_eq!(tokens.len(), text.chars().count());

        // Neither the nukta nor the aa sign is a base char.
        let unk = tokenizer.vocab().unk_token();
        assert_eq!(tokens.iter().filter(|&&t| t == unk).count(), 2);
        assert_eq!(tokenizer.decode(&tokens), "ଓଡ<UNK>ିଶ<UNK> ପ୍ରଦେଶ");
    }

    #[test]
    fn test_load_json_path() {
        let mut vocab = TokenVocab::<T>::seeded().unwrap();
        let ki = vocab.push_token("କି").unwrap();

        let tmp_dir = TempDir::new("odiatok-tokenizer").unwrap();
        let path = tmp_dir.path().join("vocab.json");
        save_json_vocab_path(&vocab, &path).unwrap();

        let tokenizer: Tokenizer<T> = Tokenizer::load_json_path(&path).unwrap();
        assert_eq!(tokenizer.vocab().as_ref(), &vocab);

        let report = tokenizer.encode_report("କି କି").unwrap();
        assert_eq!(report.tokens[0], ki);
        assert_eq!(report.token_count(), 3);
        assert_eq!(report.char_count, 5);
        assert_eq!(tokenizer.decode(&report.tokens), "କି କି");

        assert!(Tokenizer::<T>::load_json_path(tmp_dir.path().join("missing.json")).is_err());
    }
}
