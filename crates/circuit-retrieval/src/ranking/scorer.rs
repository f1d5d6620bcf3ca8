//! Keyword match-count scoring with a stable, row-order tie-break.

use std::cmp::Reverse;

use circuit_core::models::{Field, Record};
use circuit_index::{contains_ignore_case, DatasetIndex};

/// Number of (keyword, field) pairs where the keyword occurs in the field.
pub fn keyword_score(record: &Record, keywords: &[String]) -> usize {
    keywords
        .iter()
        .map(|kw| {
            Field::ALL
                .iter()
                .filter(|&&f| contains_ignore_case(record.field(f), kw))
                .count()
        })
        .sum()
}

/// Order row positions by descending score. Positions with equal scores
/// keep the order they were given in.
pub fn rank(
    index: &DatasetIndex,
    positions: impl IntoIterator<Item = usize>,
    keywords: &[String],
) -> Vec<usize> {
    let mut scored: Vec<(usize, usize)> = positions
        .into_iter()
        .filter_map(|pos| {
            index
                .record_at(pos)
                .map(|r| (pos, keyword_score(r, keywords)))
        })
        .collect();
    // sort_by_key is stable.
    scored.sort_by_key(|&(_, score)| Reverse(score));
    scored.into_iter().map(|(pos, _)| pos).collect()
}
