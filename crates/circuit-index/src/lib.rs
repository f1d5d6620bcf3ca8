//! # circuit-index
//!
//! The dataset index: a read-only table of records loaded once at startup,
//! exposing field-scoped substring search.

pub mod index;
pub mod loader;
pub mod matching;

pub use index::DatasetIndex;
pub use loader::load_records;
pub use matching::{contains_ignore_case, is_blank};
