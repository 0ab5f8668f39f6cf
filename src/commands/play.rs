//! Interactive game loop
//!
//! The nine numbered commands of the trainer: dictionary management, letter
//! setup, word attempts, and listings. All parsing and printing happens
//! here; the engine is only ever called with clean values.

use crate::core::{LetterSet, Word, WordError};
use crate::engine::{Engine, MIN_WORD_LEN, Rejection};
use crate::output::{
    print_attempt, print_found_summary, print_letters, print_possible_words,
};
use crate::wordlists::read_words;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Run the interactive command loop until quit or end of input
///
/// # Errors
///
/// Returns an error if reading user input fails; everything else is
/// reported inline and the loop keeps going.
pub fn run_play(engine: &mut Engine) -> Result<()> {
    println!(
        "\n{}",
        "Welcome to the Spelling Bee trainer".bright_yellow().bold()
    );
    print_help();

    loop {
        let Some(line) = read_command_line()? else {
            break; // End of input
        };

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let argument = parts.next().unwrap_or("");

        match command {
            "1" => new_dictionary(engine, argument),
            "2" => update_dictionary(engine, argument),
            "3" => setup_letters(engine, argument),
            "4" => show_letters(engine),
            "5" => attempt_word(engine, argument),
            "6" => show_found(engine),
            "7" => show_possible(engine),
            "8" | "?" => print_help(),
            "9" | "q" | "quit" => break,
            other => {
                println!("Unknown command '{other}'; 8 lists the commands");
            }
        }
    }

    println!("\nGoodbye!\n");
    Ok(())
}

/// Prompt and read one line; `None` on end of input
fn read_command_line() -> Result<Option<String>> {
    print!("cmd> ");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_help() {
    println!("\nCommands are given by digits 1 through 9\n");
    println!("  1 <filename> - read in a new dictionary from a file");
    println!("  2 <filename> - update the existing dictionary with words from a file");
    println!("  3 <7letters> - enter a new central letter and 6 other letters");
    println!("  4            - display current central letter and other letters");
    println!("  5 <word>     - enter a potential word");
    println!("  6            - display found words and other stats");
    println!("  7            - list all possible Spelling Bee words from the dictionary");
    println!("  8            - display this list of commands");
    println!("  9            - quit the program\n");
}

fn new_dictionary(engine: &mut Engine, filename: &str) {
    engine.clear_dictionary();
    load_into(engine, filename);
}

fn update_dictionary(engine: &mut Engine, filename: &str) {
    load_into(engine, filename);
}

fn load_into(engine: &mut Engine, filename: &str) {
    if filename.is_empty() {
        println!("{}", "No dictionary file given".red());
        return;
    }
    match read_words(Path::new(filename)) {
        Ok(tokens) => {
            let added = engine.load_dictionary(tokens.iter().map(String::as_str));
            println!(
                "Loaded {added} new words, dictionary now holds {}",
                engine.dictionary_count()
            );
        }
        Err(e) => println!("{}", format!("Could not read {filename}: {e}").red()),
    }
}

fn setup_letters(engine: &mut Engine, input: &str) {
    match LetterSet::parse(input) {
        Ok(letters) => {
            engine.set_letters(letters);
            // New puzzle, new round; the engine leaves this to us
            engine.reset_round();
            print_letters(letters);
        }
        Err(_) => println!("{}", "Invalid Letter Set".red()),
    }
}

fn show_letters(engine: &Engine) {
    match engine.letters() {
        Some(letters) => print_letters(letters),
        None => println!("No letters set; use command 3"),
    }
}

fn attempt_word(engine: &mut Engine, input: &str) {
    if input.is_empty() {
        return;
    }

    let word = match Word::new(input) {
        Ok(word) => word,
        Err(WordError::Empty) => return,
        Err(WordError::NonAlphabetic(_)) => {
            // Same rejection order as the engine: length before letters
            let rejection = if input.chars().count() < MIN_WORD_LEN {
                Rejection::TooShort
            } else {
                Rejection::InvalidLetter
            };
            println!("{}", rejection.to_string().red());
            return;
        }
    };

    match engine.attempt(&word) {
        Ok(outcome) => print_attempt(word.text(), &outcome),
        Err(rejection) => println!("{}", rejection.to_string().red()),
    }
}

fn show_found(engine: &Engine) {
    print_found_summary(
        &engine.found_words(),
        engine.score(),
        engine.pangram_found(),
        engine.is_bingo(),
    );
}

fn show_possible(engine: &Engine) {
    if engine.letters().is_none() {
        println!("No letters set; use command 3");
        return;
    }
    let words = engine.possible_words();
    print_possible_words(&words, |word| engine.is_pangram_text(word));
}
