//! Core domain types for Spelling Bee
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod letters;
mod word;

pub use letters::{LetterMask, LetterSet, LetterSetError};
pub use word::{Word, WordError};
