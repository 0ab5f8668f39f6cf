//! Random puzzle generation
//!
//! A dictionary word with exactly seven distinct letters is a puzzle: its
//! letters are the active set and it is guaranteed to be a pangram of that
//! set. Sample one, pick a central letter from it, and report what the
//! round is worth.

use crate::core::{LetterSet, Word};
use crate::engine::Engine;
use crate::output::print_generated;
use crate::wordlists::read_words;
use anyhow::{Context, Result, bail};
use rand::seq::IndexedRandom;
use std::path::Path;

/// Pick a random letter set that has at least one pangram in `words`
///
/// # Errors
///
/// Fails if no dictionary word has exactly seven distinct letters.
pub fn random_letter_set(words: &[String], rng: &mut impl rand::Rng) -> Result<LetterSet> {
    let candidates: Vec<Word> = words
        .iter()
        .filter_map(|text| Word::new(text.as_str()).ok())
        .filter(|word| word.mask().len() == 7)
        .collect();

    let Some(seed) = candidates.choose(rng) else {
        bail!("dictionary has no word with exactly 7 distinct letters");
    };

    let letters: Vec<u8> = seed.mask().iter().collect();
    let central = *letters
        .choose(rng)
        .context("seed word has no letters")?;

    // Central letter first, the parse order the configuration expects
    let mut spec = String::with_capacity(7);
    spec.push(central as char);
    for &letter in &letters {
        if letter != central {
            spec.push(letter as char);
        }
    }

    Ok(LetterSet::parse(&spec)?)
}

/// Run the `generate` subcommand
///
/// # Errors
///
/// Returns an error if the dictionary cannot be read or holds no
/// pangram-capable word.
pub fn run_generate(dictionary: &Path) -> Result<()> {
    let tokens = read_words(dictionary)?;

    let mut rng = rand::rng();
    let letters = random_letter_set(&tokens, &mut rng)?;

    let mut engine = Engine::new();
    engine.load_dictionary(tokens.iter().map(String::as_str));
    engine.set_letters(letters);

    let words = engine.possible_words();
    let total_points = words
        .iter()
        .filter_map(|text| Word::new(text.as_str()).ok())
        .map(|word| engine.word_score(&word))
        .sum();

    print_generated(letters, words.len(), total_points);
    Ok(())
}
