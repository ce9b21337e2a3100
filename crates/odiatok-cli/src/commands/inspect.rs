use std::{fmt::Write as _, hash::BuildHasher, io::Write};

use foldhash::fast::FixedState;
use odiatok::{TokenDecoder, Tokenizer};

use crate::{input_output::read_stdin_to_string, logging::LogArgs, vocab_args::VocabArgs};

/// Fixed hash seed; colors must be stable across runs and machines.
const COLOR_SEED: u64 = 0x6f64_6961_746f_6b00;

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// Also print the decoded text.
    #[arg(long)]
    decode: bool,

    /// Also print the subwords, each on a colour derived from its text.
    #[arg(long)]
    color: bool,

    #[clap(flatten)]
    logging: LogArgs,

    /// The text to encode; read from stdin when absent.
    text: Option<String>,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.vocab.load_tokenizer()?;

        let text = match &self.text {
            Some(text) => text.clone(),
            None => read_stdin_to_string()?,
        };

        let report = tokenizer.encode_report(&text)?;

        let mut out = std::io::stdout().lock();
        writeln!(out, "tokens: {:?}", report.tokens)?;
        writeln!(
            out,
            "{} chars -> {} tokens",
            report.char_count,
            report.token_count()
        )?;
        writeln!(out, "compression ratio: {:.2}", report.compression_ratio)?;

        if self.decode {
            writeln!(out, "decoded: {}", tokenizer.decode(&report.tokens))?;
        }
        if self.color {
            writeln!(out, "{}", render_colored(&tokenizer, &report.tokens))?;
        }

        Ok(())
    }
}

/// The display colour for a subword; a pure function of its text.
fn subword_color(subword: &str) -> (u8, u8, u8) {
    let hash = FixedState::with_seed(COLOR_SEED).hash_one(subword);
    let [r, g, b, ..] = hash.to_le_bytes();

    // Keep to the light half of the range, under black text.
    (128 | r >> 1, 128 | g >> 1, 128 | b >> 1)
}

/// Render each token's subword on an ANSI truecolor background.
fn render_colored(
    tokenizer: &Tokenizer<u32>,
    tokens: &[u32],
) -> String {
    let mut buf = String::new();
    for &token in tokens {
        let Some(subword) = tokenizer.vocab().lookup_span(token) else {
            continue;
        };
        let (r, g, b) = subword_color(subword);
        // Writing to a String cannot fail.
        let _ = write!(buf, "\x1b[30;48;2;{r};{g};{b}m{subword}\x1b[0m");
    }
    buf
}
