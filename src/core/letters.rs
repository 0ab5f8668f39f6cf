//! Letter coverage sets and the round letter configuration
//!
//! A `LetterMask` packs a set of letters a-z into the low 26 bits of a u32.
//! Pangram and bingo checks become subset tests on masks instead of nested
//! character scans.

use std::fmt;

/// Set of lowercase letters, one bit per letter
///
/// Bit 0 is 'a', bit 25 is 'z'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMask(u32);

impl LetterMask {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a mask from the letters of a lowercase ASCII string
    ///
    /// Non-letter bytes are ignored; callers validate before this point.
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut mask = Self::EMPTY;
        for &b in text.as_bytes() {
            if b.is_ascii_lowercase() {
                mask.insert(b);
            }
        }
        mask
    }

    /// Add a letter to the set
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        debug_assert!(letter.is_ascii_lowercase());
        self.0 |= 1 << (letter - b'a');
    }

    /// Check membership of a single letter
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    /// True if every letter of `other` is in `self`
    #[inline]
    #[must_use]
    pub const fn covers(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    /// Union of two sets
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// True if no letter is set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// The seven active letters of a round: one central letter plus six others
///
/// The other letters keep the order they were entered in, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSet {
    central: u8,
    others: [u8; 6],
    mask: LetterMask,
}

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterSetError {
    DuplicateLetter(char),
    WrongCount(usize),
}

impl fmt::Display for LetterSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLetter(c) => write!(f, "Letter '{c}' appears more than once"),
            Self::WrongCount(n) => {
                write!(f, "Need exactly 7 distinct letters, got {n}")
            }
        }
    }
}

impl std::error::Error for LetterSetError {}

impl LetterSet {
    /// Parse a letter set from user input
    ///
    /// The first letter is the central letter, the remaining six are the
    /// other allowed letters. Case-insensitive; non-letter characters
    /// (commas, spaces) are skipped, so "a,bcdefg" and "Abcdefg" both work.
    ///
    /// # Errors
    /// Returns `LetterSetError` if a letter repeats or the input does not
    /// contain exactly 7 letters after filtering.
    ///
    /// # Examples
    /// ```
    /// use spellbee::core::LetterSet;
    ///
    /// let set = LetterSet::parse("abcdefg").unwrap();
    /// assert_eq!(set.central(), b'a');
    ///
    /// assert!(LetterSet::parse("abcdefa").is_err());
    /// assert!(LetterSet::parse("abc").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LetterSetError> {
        let mut letters = [0u8; 7];
        let mut count = 0;
        let mut mask = LetterMask::EMPTY;

        for c in input.chars() {
            if !c.is_ascii_alphabetic() {
                continue;
            }
            let letter = c.to_ascii_lowercase() as u8;
            if mask.contains(letter) {
                return Err(LetterSetError::DuplicateLetter(letter as char));
            }
            if count < 7 {
                letters[count] = letter;
            }
            mask.insert(letter);
            count += 1;
        }

        if count != 7 {
            return Err(LetterSetError::WrongCount(count));
        }

        let mut others = [0u8; 6];
        others.copy_from_slice(&letters[1..]);

        Ok(Self {
            central: letters[0],
            others,
            mask,
        })
    }

    /// The letter every valid word must contain
    #[inline]
    #[must_use]
    pub const fn central(self) -> u8 {
        self.central
    }

    /// The six other allowed letters, in entry order
    #[inline]
    #[must_use]
    pub const fn others(self) -> [u8; 6] {
        self.others
    }

    /// Mask of all seven active letters
    #[inline]
    #[must_use]
    pub const fn mask(self) -> LetterMask {
        self.mask
    }

    /// Check whether a letter is one of the seven active letters
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.mask.contains(letter)
    }
}

impl std::str::FromStr for LetterSet {
    type Err = LetterSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
