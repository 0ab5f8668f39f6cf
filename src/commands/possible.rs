//! One-shot possible-word listing
//!
//! Loads a dictionary, applies a letter set, and reports everything the
//! round can yield: the word list plus a score and length breakdown.

use crate::core::{LetterSet, Word};
use crate::engine::Engine;
use crate::output::{print_possible_summary, print_possible_words};
use crate::wordlists::read_words;
use anyhow::Result;
use rustc_hash::FxHashMap;
use std::path::Path;

/// What a letter set is worth against a dictionary
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PossibleSummary {
    /// Sum of every possible word's score, pangram bonuses included
    pub total_points: u32,
    /// How many possible words are pangrams
    pub pangrams: usize,
    /// Word count per word length
    pub by_length: FxHashMap<usize, usize>,
}

/// Compute the summary for an engine with letters already configured
#[must_use]
pub fn summarize_possible(engine: &Engine, words: &[String]) -> PossibleSummary {
    let mut summary = PossibleSummary::default();

    for text in words {
        *summary.by_length.entry(text.len()).or_insert(0) += 1;
        // Possible words came out of the trie, so they re-validate cleanly
        if let Ok(word) = Word::new(text.as_str()) {
            summary.total_points += engine.word_score(&word);
            if engine.is_word_pangram(&word) {
                summary.pangrams += 1;
            }
        }
    }

    summary
}

/// Run the `possible` subcommand
///
/// # Errors
///
/// Returns an error if the dictionary file cannot be read.
pub fn run_possible(dictionary: &Path, letters: LetterSet) -> Result<()> {
    let tokens = read_words(dictionary)?;

    let mut engine = Engine::new();
    engine.load_dictionary(tokens.iter().map(String::as_str));
    engine.set_letters(letters);

    let words = engine.possible_words();
    print_possible_words(&words, |word| engine.is_pangram_text(word));

    let summary = summarize_possible(&engine, &words);
    print_possible_summary(summary.total_points, summary.pangrams, &summary.by_length);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_points_and_pangrams() {
        let mut engine = Engine::new();
        engine.load_dictionary(["cafe", "cabbage", "bacdefg"]);
        engine.set_letters(LetterSet::parse("abcdefg").unwrap());

        let words = engine.possible_words();
        let summary = summarize_possible(&engine, &words);

        // cafe: 1, cabbage: 7, bacdefg: 7 + 7 bonus
        assert_eq!(summary.total_points, 1 + 7 + 14);
        assert_eq!(summary.pangrams, 1);
        assert_eq!(summary.by_length.get(&4), Some(&1));
        assert_eq!(summary.by_length.get(&7), Some(&2));
    }

    #[test]
    fn summary_empty_round() {
        let mut engine = Engine::new();
        engine.set_letters(LetterSet::parse("abcdefg").unwrap());

        let words = engine.possible_words();
        let summary = summarize_possible(&engine, &words);

        assert_eq!(summary, PossibleSummary::default());
    }
}
