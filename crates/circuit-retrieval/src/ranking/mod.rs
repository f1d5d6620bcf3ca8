//! Match-count ranking.

mod scorer;

pub use scorer::{keyword_score, rank};
