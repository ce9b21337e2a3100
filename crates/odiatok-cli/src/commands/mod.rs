mod cat;
mod inspect;
mod train;

/// Subcommands for odiatok
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Act as a streaming tokenizer.
    Cat(cat::CatArgs),

    /// Encode one text and report on the tokens.
    Inspect(inspect::InspectArgs),

    /// Train a new vocabulary.
    Train(train::TrainArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Train(cmd) => cmd.run(),
        }
    }
}
