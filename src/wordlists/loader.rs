//! Word list loading utilities
//!
//! The dictionary format is whitespace-delimited tokens; one word per line
//! and many words per line both work. Tokens are not validated here: the
//! trie's own insert validation skips malformed ones, so the loader stays a
//! dumb token source.

use std::fs;
use std::io;
use std::path::Path;

/// Read every whitespace-delimited token from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use spellbee::wordlists::read_words;
///
/// let words = read_words("data/dictionary.txt").unwrap();
/// println!("Read {} tokens", words.len());
/// ```
pub fn read_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .split_whitespace()
        .map(std::borrow::ToOwned::to_owned)
        .collect())
}
