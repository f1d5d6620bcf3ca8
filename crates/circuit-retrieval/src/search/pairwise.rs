//! Pairwise-intersection-then-union over a single field.
//!
//! Requiring every keyword to co-occur in one field is too strict: terms
//! often split across the two fields. Requiring some pair to co-occur
//! keeps precision while leaning toward recall.

use std::collections::BTreeSet;

use circuit_core::models::Field;
use circuit_index::DatasetIndex;
use tracing::debug;

/// Row positions satisfying the pairwise rule for `field`.
///
/// Keywords with no match in the field are dropped first. Zero valid
/// keywords yield nothing; one valid keyword yields its own match set;
/// otherwise the result is the union of every pair's intersection.
pub fn pairwise_union_intersection(
    index: &DatasetIndex,
    field: Field,
    keywords: &[String],
) -> BTreeSet<usize> {
    let valid: Vec<(&str, BTreeSet<usize>)> = keywords
        .iter()
        .filter_map(|kw| {
            let matches: BTreeSet<usize> =
                index.positions_matching(field, kw).into_iter().collect();
            debug!(field = %field, keyword = %kw, matches = matches.len(), "keyword matched");
            (!matches.is_empty()).then_some((kw.as_str(), matches))
        })
        .collect();

    match valid.len() {
        0 => BTreeSet::new(),
        1 => valid.into_iter().next().map(|(_, m)| m).unwrap_or_default(),
        n => {
            let mut union = BTreeSet::new();
            for i in 0..n {
                for j in (i + 1)..n {
                    let (a, left) = &valid[i];
                    let (b, right) = &valid[j];
                    let before = union.len();
                    union.extend(left.intersection(right).copied());
                    debug!(field = %field, pair = ?(a, b), added = union.len() - before, "pair intersected");
                }
            }
            union
        }
    }
}
