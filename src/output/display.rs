//! Display functions for command results

use super::formatters::{count_noun, round_annotations, word_row};
use crate::core::LetterSet;
use crate::engine::Accepted;
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print the active letter set the way the game announces it
pub fn print_letters(letters: LetterSet) {
    println!(
        "Central Letter: {}",
        (letters.central() as char)
            .to_string()
            .bright_yellow()
            .bold()
    );
    let others: Vec<String> = letters
        .others()
        .iter()
        .map(|&l| (l as char).to_string())
        .collect();
    println!("6 Other Letters: {}", others.join(","));
}

/// Print the result of an accepted word
pub fn print_attempt(word: &str, outcome: &Accepted) {
    print!(
        "found {} {}, total {}",
        word.bright_white().bold(),
        count_noun(outcome.points as usize, "point"),
        count_noun(outcome.total as usize, "point")
    );
    if outcome.pangram {
        print!("{}", ", Pangram found".bright_green().bold());
    }
    if outcome.bingo {
        print!("{}", ", Bingo scored".bright_cyan().bold());
    }
    println!();
}

/// Print the found words with the round stats line
pub fn print_found_summary(words: &[String], score: u32, pangram_found: bool, bingo_scored: bool) {
    for word in words {
        println!("{}", word_row(word));
    }
    println!(
        "{} found, total {}{}",
        count_noun(words.len(), "word"),
        count_noun(score as usize, "point"),
        round_annotations(pangram_found, bingo_scored)
    );
}

/// Print every possible word, annotating pangrams
///
/// `is_pangram` is the engine's coverage check for the active letter set.
pub fn print_possible_words(words: &[String], is_pangram: impl Fn(&str) -> bool) {
    for word in words {
        if is_pangram(word) {
            println!("{}  {}", word_row(word), "Pangram".bright_green());
        } else {
            println!("{}", word_row(word));
        }
    }
}

/// Print the summary block after a possible-word listing
pub fn print_possible_summary(
    total_points: u32,
    pangrams: usize,
    by_length: &FxHashMap<usize, usize>,
) {
    println!("\n{}", "Available this round:".bright_cyan().bold());
    println!(
        "   Total:    {}, {}",
        count_noun(by_length.values().sum(), "word"),
        count_noun(total_points as usize, "point")
    );
    println!("   Pangrams: {pangrams}");

    let mut lengths: Vec<usize> = by_length.keys().copied().collect();
    lengths.sort_unstable();
    for len in lengths {
        println!("   {len:>2} letters: {}", by_length[&len]);
    }
}

/// Print a freshly generated puzzle with what it is worth
pub fn print_generated(letters: LetterSet, word_count: usize, total_points: u32) {
    println!("{}", "Generated letter set".bright_cyan().bold());
    print_letters(letters);
    println!(
        "Yields {} for {}",
        count_noun(word_count, "word"),
        count_noun(total_points as usize, "point")
    );
}
