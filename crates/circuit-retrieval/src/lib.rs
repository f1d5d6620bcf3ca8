//! # circuit-retrieval
//!
//! Turns keyword lists into ranked candidate sets and narrows candidate
//! sets by user selections and clue keywords.

pub mod clue;
pub mod engine;
pub mod filter;
pub mod format;
pub mod ranking;
pub mod search;

pub use clue::apply_clues;
pub use engine::RetrievalEngine;
pub use filter::{filter_by_selection, normalize_selection, FilterOutcome, MatchStrategy};
