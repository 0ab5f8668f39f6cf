//! Candidate word representation
//!
//! A Word stores a lowercased candidate word along with the mask of its
//! distinct letters, so rule checks never rescan the text.

use super::letters::LetterMask;
use std::fmt;

/// A validated candidate word: non-empty, ASCII letters only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    mask: LetterMask,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAlphabetic(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAlphabetic(c) => {
                write!(f, "Word must contain only letters, got {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Lowercases the input. Any length is accepted here; the length-4 floor
    /// is a game rule, not a word-validity rule.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty or contains any character
    /// that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use spellbee::core::Word;
    ///
    /// let word = Word::new("Cabbage").unwrap();
    /// assert_eq!(word.text(), "cabbage");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("dog-eared").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(c) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic(c));
        }

        let text = text.to_ascii_lowercase();
        let mask = LetterMask::of(&text);

        Ok(Self { text, mask })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word is non-empty by construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mask of the distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> LetterMask {
        self.mask
    }

    /// The first letter, as a lowercase byte
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> u8 {
        self.text.as_bytes()[0]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.mask.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cabbage").unwrap();
        assert_eq!(word.text(), "cabbage");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CABBAGE").unwrap();
        assert_eq!(word.text(), "cabbage");

        let word2 = Word::new("CaBbAgE").unwrap();
        assert_eq!(word2.text(), "cabbage");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("dog1"),
            Err(WordError::NonAlphabetic('1'))
        ));
        assert!(Word::new("dog house").is_err()); // Space
        assert!(Word::new("dog's").is_err()); // Apostrophe
        assert!(Word::new("naïve").is_err()); // Non-ASCII
    }

    #[test]
    fn word_mask_distinct_letters() {
        let word = Word::new("cabbage").unwrap();
        assert_eq!(word.mask().len(), 5); // c, a, b, g, e
        assert!(word.has_letter(b'b'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_first_letter() {
        assert_eq!(Word::new("Dog").unwrap().first_letter(), b'd');
        assert_eq!(Word::new("apple").unwrap().first_letter(), b'a');
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("dog").unwrap(), Word::new("DOG").unwrap());
        assert_ne!(Word::new("dog").unwrap(), Word::new("dig").unwrap());
    }

    #[test]
    fn word_display() {
        let word = Word::new("Hive").unwrap();
        assert_eq!(format!("{word}"), "hive");
    }
}
