//! Formatting utilities for terminal output

/// Pluralize a count: "1 point", "5 points", "1 word", ...
#[must_use]
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// One listing row: word right-aligned to 17 columns, then its length
#[must_use]
pub fn word_row(word: &str) -> String {
    format!("{word:>17} {:>2}", word.len())
}

/// Trailing annotations for a stats line
#[must_use]
pub fn round_annotations(pangram_found: bool, bingo_scored: bool) -> String {
    let mut suffix = String::new();
    if pangram_found {
        suffix.push_str(", Pangram found");
    }
    if bingo_scored {
        suffix.push_str(", Bingo scored");
    }
    suffix
}
