//! Spelling Bee trainer
//!
//! A letter-trie dictionary with a Spelling Bee rule engine on top:
//! validate candidate words against a central letter and six allowed
//! letters, score them with pangram bonuses, and enumerate everything a
//! puzzle can yield.
//!
//! # Quick Start
//!
//! ```rust
//! use spellbee::core::{LetterSet, Word};
//! use spellbee::engine::Engine;
//!
//! let mut engine = Engine::new();
//! engine.load_dictionary(["cafe", "decaf", "bacdefg"]);
//! engine.set_letters(LetterSet::parse("abcdefg").unwrap());
//!
//! let outcome = engine.attempt(&Word::new("decaf").unwrap()).unwrap();
//! assert_eq!(outcome.points, 5);
//! ```

// Core domain types
pub mod core;

// The letter trie
pub mod trie;

// Game rules and round state
pub mod engine;

// Word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
