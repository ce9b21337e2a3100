mod commands;
mod input_output;
mod logging;
mod tokenizer_mode;
mod vocab_args;

use clap::Parser;
use commands::Commands;

/// odiatok: train and run Odia subword tokenizers.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
