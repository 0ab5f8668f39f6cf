//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing. All game text
//! formatting lives here; the engine only produces values.

pub mod display;
pub mod formatters;

pub use display::{
    print_attempt, print_found_summary, print_generated, print_letters, print_possible_summary,
    print_possible_words,
};
