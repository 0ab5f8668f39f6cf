//! Word sources for the dictionary
//!
//! The engine only needs "iterate tokens, insert each"; this module provides
//! the file-backed token source the CLI commands feed from.

pub mod loader;

pub use loader::read_words;
