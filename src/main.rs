//! Spelling Bee trainer - CLI
//!
//! Interactive trainer, one-shot listings, and puzzle generation over a
//! plain text dictionary.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use spellbee::{
    commands::{run_generate, run_play, run_possible},
    core::LetterSet,
    engine::Engine,
    wordlists::read_words,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spellbee",
    about = "Spelling Bee trainer built on a letter-trie dictionary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (preloaded in play mode, required otherwise)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game loop (default)
    Play,

    /// List every word a letter set can make from the dictionary
    Possible {
        /// Central letter first, then the 6 other letters (e.g. "dogehcn")
        letters: LetterSet,
    },

    /// Generate a random puzzle letter set from the dictionary
    Generate,
}

fn main() -> Result<()> {
    let Cli {
        command,
        dictionary,
    } = Cli::parse();

    // Default to Play mode if no command given
    match command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut engine = Engine::new();
            if let Some(path) = &dictionary {
                let tokens = read_words(path)?;
                engine.load_dictionary(tokens.iter().map(String::as_str));
            }
            run_play(&mut engine)
        }
        Commands::Possible { letters } => run_possible(&require_dictionary(dictionary)?, letters),
        Commands::Generate => run_generate(&require_dictionary(dictionary)?),
    }
}

fn require_dictionary(dictionary: Option<PathBuf>) -> Result<PathBuf> {
    dictionary.ok_or_else(|| anyhow!("this command needs a dictionary; pass one with --dictionary"))
}
