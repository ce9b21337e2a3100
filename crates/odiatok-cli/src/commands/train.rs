use odiatok::{TokenVocab, training::BpeTrainerOptions, vocab::io::write_json_vocab};

use crate::{input_output::OutputArgs, logging::LogArgs};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Corpus text files; each is read whole.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocab size, counting the special and base tokens.
    #[arg(long, default_value = "5000")]
    vocab_size: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut trainer = BpeTrainerOptions::new(self.vocab_size).init()?;

        log::info!("Reading corpus:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            let text = std::fs::read_to_string(path)?;
            trainer.update_from_text(&text)?;
        }

        log::info!("Training Tokenizer...");
        let vocab: TokenVocab<u32> = trainer.train()?;

        log::info!("Vocabulary Size: {}", vocab.len());

        if let Some(path) = self.output.path() {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_json_vocab(&vocab, &mut writer)?;

        Ok(())
    }
}
