//! RetrievalEngine: per-field pairwise matching → cross-field union → rank.

use std::collections::BTreeSet;

use circuit_core::models::{CandidateSet, Field};
use circuit_index::DatasetIndex;
use tracing::{debug, info};

use crate::ranking;
use crate::search::pairwise_union_intersection;

/// Keyword search over the dataset index.
///
/// Within one field keywords combine by relaxed AND (any pair must
/// co-occur); across fields results combine by OR.
pub struct RetrievalEngine<'a> {
    index: &'a DatasetIndex,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(index: &'a DatasetIndex) -> Self {
        Self { index }
    }

    /// Run a keyword search. Output order is a pure function of the
    /// dataset and the keyword list.
    pub fn search(&self, keywords: &[String]) -> CandidateSet {
        let hierarchy = pairwise_union_intersection(self.index, Field::HierarchyPath, keywords);
        let names = pairwise_union_intersection(self.index, Field::DisplayName, keywords);
        debug!(
            hierarchy = hierarchy.len(),
            display_name = names.len(),
            "per-field matches"
        );

        if hierarchy.is_empty() && names.is_empty() {
            info!(?keywords, "no field matched any keyword");
            return CandidateSet::new();
        }

        // BTreeSet keeps row order, which is the tie-break order for ranking.
        let union: BTreeSet<usize> = hierarchy.union(&names).copied().collect();
        let ranked = ranking::rank(self.index, union, keywords);

        info!(?keywords, results = ranked.len(), "search complete");
        self.index.records_at(ranked)
    }
}
