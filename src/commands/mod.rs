//! Command implementations

pub mod generate;
pub mod play;
pub mod possible;

pub use generate::run_generate;
pub use play::run_play;
pub use possible::{PossibleSummary, run_possible, summarize_possible};
