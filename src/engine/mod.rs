//! Spelling Bee rule engine
//!
//! Owns two independent tries (the loaded dictionary and the words already
//! found this round) plus the round state: the active letter set, the running
//! score, and the sticky pangram/bingo flags. The engine composes trie
//! operations; it knows nothing about files or terminals.

use crate::core::{LetterMask, LetterSet, Word};
use crate::trie::LetterTrie;
use std::fmt;

/// Shortest word the game accepts
pub const MIN_WORD_LEN: usize = 4;

/// Flat bonus added to a pangram's length score
pub const PANGRAM_BONUS: u32 = 7;

/// Found words needed before a bingo is possible
pub const BINGO_WORDS: usize = 7;

/// Why an attempted word was not accepted
///
/// Checks run in declaration order and short-circuit, so a word that is both
/// too short and missing the central letter reports `TooShort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    MissingCentral,
    InvalidLetter,
    NotInDictionary,
    AlreadyFound,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::TooShort => "word is too short",
            Self::MissingCentral => "word is missing central letter",
            Self::InvalidLetter => "word contains invalid letter",
            Self::NotInDictionary => "word is not in the dictionary",
            Self::AlreadyFound => "word has already been found",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for Rejection {}

/// Outcome of an accepted word, for the caller to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted {
    /// Points this word scored
    pub points: u32,
    /// Running total after this word
    pub total: u32,
    /// This word used all seven active letters
    pub pangram: bool,
    /// A bingo holds after this word
    pub bingo: bool,
}

/// The Spelling Bee game engine
///
/// # Examples
/// ```
/// use spellbee::core::{LetterSet, Word};
/// use spellbee::engine::Engine;
///
/// let mut engine = Engine::new();
/// engine.insert_word("cafe");
/// engine.set_letters(LetterSet::parse("abcdefg").unwrap());
///
/// let outcome = engine.attempt(&Word::new("cafe").unwrap()).unwrap();
/// assert_eq!(outcome.points, 1);
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    dictionary: LetterTrie,
    found: LetterTrie,
    letters: Option<LetterSet>,
    score: u32,
    pangram_found: bool,
    bingo_found: bool,
}

impl Engine {
    /// Create an engine with an empty dictionary and no letters configured
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one word to the dictionary
    ///
    /// Returns false for malformed or duplicate words, per the trie's own
    /// validation; the word source feeds tokens straight through here.
    pub fn insert_word(&mut self, word: &str) -> bool {
        self.dictionary.insert(word)
    }

    /// Insert a batch of words, returning how many were newly stored
    pub fn load_dictionary<'a, I>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .filter(|word| self.dictionary.insert(word))
            .count()
    }

    /// Drop every dictionary word
    pub fn clear_dictionary(&mut self) {
        self.dictionary.clear();
    }

    /// Number of dictionary words, O(1)
    #[must_use]
    pub fn dictionary_count(&self) -> usize {
        self.dictionary.word_count()
    }

    /// Replace the active letter set wholesale
    ///
    /// Round state is deliberately untouched; callers that want a fresh
    /// round call [`Engine::reset_round`] as a separate, explicit step.
    pub fn set_letters(&mut self, letters: LetterSet) {
        self.letters = Some(letters);
    }

    /// The active letter set, if one has been configured
    #[must_use]
    pub fn letters(&self) -> Option<LetterSet> {
        self.letters
    }

    /// Clear the found words, the score, and both sticky flags
    pub fn reset_round(&mut self) {
        self.found.clear();
        self.score = 0;
        self.pangram_found = false;
        self.bingo_found = false;
    }

    /// Check a candidate against the game rules without mutating anything
    ///
    /// Membership in both tries uses path existence: a stored word's prefix
    /// counts as present. Preserved on purpose; see the trie docs.
    ///
    /// # Errors
    /// Returns the first failing [`Rejection`], in check order.
    pub fn validate(&self, word: &Word) -> Result<(), Rejection> {
        if word.len() < MIN_WORD_LEN {
            return Err(Rejection::TooShort);
        }
        // With no letters configured, no word can contain the central letter
        let Some(letters) = self.letters else {
            return Err(Rejection::MissingCentral);
        };
        if !word.has_letter(letters.central()) {
            return Err(Rejection::MissingCentral);
        }
        if !letters.mask().covers(word.mask()) {
            return Err(Rejection::InvalidLetter);
        }
        if !self.dictionary.search(word.text()) {
            return Err(Rejection::NotInDictionary);
        }
        if self.found.search(word.text()) {
            return Err(Rejection::AlreadyFound);
        }
        Ok(())
    }

    /// Validate and, if accepted, record a word for the current round
    ///
    /// Inserts into the found trie, adds the word's score to the total, and
    /// updates the sticky pangram/bingo flags.
    ///
    /// # Errors
    /// Returns the [`Rejection`] from [`Engine::validate`]; nothing mutates
    /// on rejection.
    pub fn attempt(&mut self, word: &Word) -> Result<Accepted, Rejection> {
        self.validate(word)?;

        self.found.insert(word.text());
        let points = self.word_score(word);
        self.score += points;

        let pangram = self.is_word_pangram(word);
        self.pangram_found |= pangram;
        let bingo = self.is_bingo();
        self.bingo_found |= bingo;

        Ok(Accepted {
            points,
            total: self.score,
            pangram,
            bingo,
        })
    }

    /// Score one word: 1 point at the length-4 floor, otherwise its length,
    /// plus a flat bonus when it is a pangram
    #[must_use]
    pub fn word_score(&self, word: &Word) -> u32 {
        if word.len() == MIN_WORD_LEN {
            return 1;
        }
        let mut score = word.len() as u32;
        if self.is_word_pangram(word) {
            score += PANGRAM_BONUS;
        }
        score
    }

    /// True iff the word uses every one of the seven active letters
    ///
    /// Coverage over distinct letters; repeats are irrelevant. A covering
    /// word necessarily has seven or more letters.
    #[must_use]
    pub fn is_word_pangram(&self, word: &Word) -> bool {
        self.letters
            .is_some_and(|letters| word.mask().covers(letters.mask()))
    }

    /// Pangram check for an already-stored dictionary word
    #[must_use]
    pub fn is_pangram_text(&self, text: &str) -> bool {
        self.letters
            .is_some_and(|letters| LetterMask::of(text).covers(letters.mask()))
    }

    /// True iff at least seven words are found and their first letters cover
    /// all seven active letters
    #[must_use]
    pub fn is_bingo(&self) -> bool {
        let Some(letters) = self.letters else {
            return false;
        };
        if self.found.word_count() < BINGO_WORDS {
            return false;
        }

        let mut firsts = LetterMask::EMPTY;
        for word in self.found.words() {
            if let Some(&first) = word.as_bytes().first() {
                firsts.insert(first);
            }
        }
        firsts.covers(letters.mask())
    }

    /// Every dictionary word that is legal this round, in dictionary order
    ///
    /// Keeps words of length 4 or more that contain the central letter and
    /// use only active letters. The trie enumerates lexicographically and
    /// filtering preserves that order.
    #[must_use]
    pub fn possible_words(&self) -> Vec<String> {
        let Some(letters) = self.letters else {
            return Vec::new();
        };

        self.dictionary
            .words()
            .into_iter()
            .filter(|word| {
                if word.len() < MIN_WORD_LEN {
                    return false;
                }
                let mask = LetterMask::of(word);
                mask.contains(letters.central()) && letters.mask().covers(mask)
            })
            .collect()
    }

    /// Words found so far this round, in ascending order
    #[must_use]
    pub fn found_words(&self) -> Vec<String> {
        self.found.words()
    }

    /// Number of words found this round, O(1)
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.word_count()
    }

    /// Running score for the current round
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// A pangram has been found at some point this round
    #[must_use]
    pub fn pangram_found(&self) -> bool {
        self.pangram_found
    }

    /// A bingo has been scored at some point this round
    #[must_use]
    pub fn bingo_found(&self) -> bool {
        self.bingo_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn engine_with(words: &[&str], letters: &str) -> Engine {
        let mut engine = Engine::new();
        engine.load_dictionary(words.iter().copied());
        engine.set_letters(LetterSet::parse(letters).unwrap());
        engine
    }

    #[test]
    fn validation_order_too_short_first() {
        // "ab" is short, missing nothing else matters: TooShort wins
        let engine = engine_with(&[], "abcdefg");
        assert_eq!(engine.validate(&word("ab")), Err(Rejection::TooShort));
    }

    #[test]
    fn validation_missing_central() {
        let engine = engine_with(&["bead"], "zbcdefg");
        assert_eq!(
            engine.validate(&word("bead")),
            Err(Rejection::MissingCentral)
        );
    }

    #[test]
    fn validation_invalid_letter() {
        let engine = engine_with(&["apex"], "abcdefg");
        // 'p' and 'x' are outside the active set
        assert_eq!(engine.validate(&word("apex")), Err(Rejection::InvalidLetter));
    }

    #[test]
    fn validation_not_in_dictionary() {
        let engine = engine_with(&["cafe"], "abcdefg");
        assert_eq!(
            engine.validate(&word("face")),
            Err(Rejection::NotInDictionary)
        );
    }

    #[test]
    fn validation_already_found() {
        let mut engine = engine_with(&["cafe"], "abcdefg");
        engine.attempt(&word("cafe")).unwrap();
        assert_eq!(engine.validate(&word("cafe")), Err(Rejection::AlreadyFound));
    }

    #[test]
    fn validation_without_letters_configured() {
        let mut engine = Engine::new();
        engine.insert_word("cafe");
        assert_eq!(
            engine.validate(&word("cafe")),
            Err(Rejection::MissingCentral)
        );
    }

    #[test]
    fn dictionary_membership_is_path_existence() {
        // "dogge" is only a prefix of "dogged", yet it validates: the
        // dictionary check walks the path without looking at the word flag.
        let engine = engine_with(&["dogged"], "dogechn");
        assert_eq!(engine.validate(&word("dogge")), Ok(()));
    }

    #[test]
    fn four_letter_word_scores_one() {
        let mut engine = engine_with(&["cafe"], "abcdefg");
        let outcome = engine.attempt(&word("cafe")).unwrap();
        assert_eq!(outcome.points, 1);
        assert_eq!(outcome.total, 1);
        assert!(!outcome.pangram);
    }

    #[test]
    fn longer_word_scores_length() {
        // "cabbage": 7 letters but only 5 distinct, so no pangram bonus
        let mut engine = engine_with(&["cabbage"], "abcdefg");
        let outcome = engine.attempt(&word("cabbage")).unwrap();
        assert_eq!(outcome.points, 7);
        assert!(!outcome.pangram);
    }

    #[test]
    fn pangram_scores_length_plus_bonus() {
        let mut engine = engine_with(&["bacdefg"], "abcdefg");
        let outcome = engine.attempt(&word("bacdefg")).unwrap();
        assert_eq!(outcome.points, 7 + 7);
        assert!(outcome.pangram);
        assert!(engine.pangram_found());
    }

    #[test]
    fn pangram_with_repeats_still_covers() {
        let engine = engine_with(&[], "abcdefg");
        assert!(engine.is_word_pangram(&word("abcdefgabc")));
        assert!(!engine.is_word_pangram(&word("abcdef"))); // Only 6 of 7
        assert!(!engine.is_word_pangram(&word("abc")));
    }

    #[test]
    fn score_accumulates() {
        let mut engine = engine_with(&["cafe", "faced"], "abcdefg");
        engine.attempt(&word("cafe")).unwrap();
        let outcome = engine.attempt(&word("faced")).unwrap();
        assert_eq!(outcome.total, 1 + 5);
        assert_eq!(engine.score(), 6);
    }

    #[test]
    fn bingo_requires_seven_words() {
        let words = ["abca", "bcab", "cabc", "dada", "eafa", "faga"];
        let mut engine = engine_with(&words, "abcdefg");
        for text in words {
            engine.attempt(&word(text)).unwrap();
        }
        // Six words with six distinct first letters: still not a bingo
        assert!(!engine.is_bingo());
    }

    #[test]
    fn bingo_requires_first_letter_coverage() {
        let words = [
            "abba", "abbab", "abbac", "abbad", "abbae", "abbaf", "abbag",
        ];
        let mut engine = engine_with(&words, "abcdefg");
        for text in words {
            engine.attempt(&word(text)).unwrap();
        }
        // Seven words all starting with 'a': no bingo
        assert!(!engine.is_bingo());
        assert!(!engine.bingo_found());
    }

    #[test]
    fn bingo_with_full_coverage() {
        let words = [
            "abca", "bcab", "cabc", "dada", "eafa", "faga", "gaba",
        ];
        let mut engine = engine_with(&words, "abcdefg");
        let mut last_bingo = false;
        for text in words {
            last_bingo = engine.attempt(&word(text)).unwrap().bingo;
        }
        assert!(last_bingo);
        assert!(engine.is_bingo());
        assert!(engine.bingo_found());
    }

    #[test]
    fn possible_words_filtering() {
        let mut engine = Engine::new();
        engine.load_dictionary(["dog", "dogged", "cat", "decode", "dodge"]);
        engine.set_letters(LetterSet::parse("dogehcn").unwrap());

        // "dog" fails the length floor, "cat" misses the central letter and
        // uses letters outside the set
        assert_eq!(engine.possible_words(), vec!["decode", "dodge", "dogged"]);
    }

    #[test]
    fn possible_words_preserve_dictionary_order() {
        let mut engine = Engine::new();
        engine.load_dictionary(["geed", "dace", "cede", "bead"]);
        engine.set_letters(LetterSet::parse("eabcdfg").unwrap());

        let words = engine.possible_words();
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted);
    }

    #[test]
    fn possible_words_without_letters_is_empty() {
        let mut engine = Engine::new();
        engine.load_dictionary(["dogged"]);
        assert!(engine.possible_words().is_empty());
    }

    #[test]
    fn set_letters_does_not_reset_round() {
        let mut engine = engine_with(&["cafe"], "abcdefg");
        engine.attempt(&word("cafe")).unwrap();

        engine.set_letters(LetterSet::parse("gfedcba").unwrap());
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.found_count(), 1);
    }

    #[test]
    fn reset_round_clears_state() {
        let mut engine = engine_with(&["bacdefg"], "abcdefg");
        engine.attempt(&word("bacdefg")).unwrap();
        assert!(engine.pangram_found());

        engine.reset_round();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.found_count(), 0);
        assert!(!engine.pangram_found());
        assert!(!engine.bingo_found());
        // The dictionary survives a round reset
        assert_eq!(engine.dictionary_count(), 1);
        assert_eq!(engine.validate(&word("bacdefg")), Ok(()));
    }

    #[test]
    fn rejection_does_not_mutate() {
        let mut engine = engine_with(&["cafe"], "abcdefg");
        assert!(engine.attempt(&word("zzzz")).is_err());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.found_count(), 0);
    }

    #[test]
    fn load_dictionary_counts_new_words_only() {
        let mut engine = Engine::new();
        let added = engine.load_dictionary(["dog", "cat", "dog", "b@d"]);
        assert_eq!(added, 2);
        assert_eq!(engine.dictionary_count(), 2);
    }
}
