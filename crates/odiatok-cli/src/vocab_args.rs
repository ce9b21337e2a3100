use odiatok::Tokenizer;

/// Vocabulary selection argument group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Path to a JSON vocabulary file, as written by `odiatok train`.
    #[arg(long, default_value = "odia_tokenizer.json")]
    pub vocab: String,
}

impl VocabArgs {
    /// Load the selected vocabulary as a tokenizer.
    pub fn load_tokenizer(&self) -> Result<Tokenizer<u32>, Box<dyn std::error::Error>> {
        log::info!("Loading vocab: {}", self.vocab);
        let tokenizer = Tokenizer::load_json_path(&self.vocab)?;
        log::info!("Vocab size: {}", tokenizer.vocab().len());
        Ok(tokenizer)
    }
}
