//! Selection filter: narrows a candidate set by a chosen option.

mod normalize;
mod strategies;

use circuit_core::models::{CandidateSet, Field, FilterLogic};
use tracing::debug;

pub use normalize::{normalize_selection, FILLER_PHRASES};
pub use strategies::{MatchStrategy, CONTROLLED_VOCABULARY};

/// Result of running the cascade, with the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub results: CandidateSet,
    /// `None` when no strategy matched.
    pub strategy: Option<MatchStrategy>,
    pub normalized: String,
}

/// Narrow `candidates` by `selection` on `field`.
///
/// `logic` is recorded for audit only; the cascade is the same for both.
pub fn filter_by_selection(
    candidates: &CandidateSet,
    selection: &str,
    field: Field,
    logic: FilterLogic,
) -> CandidateSet {
    filter_with_outcome(candidates, selection, field, logic).results
}

/// Like [`filter_by_selection`], reporting which strategy matched.
pub fn filter_with_outcome(
    candidates: &CandidateSet,
    selection: &str,
    field: Field,
    logic: FilterLogic,
) -> FilterOutcome {
    let normalized = normalize_selection(selection);
    debug!(selection, normalized = %normalized, field = %field, logic = %logic, "filtering by selection");

    for strategy in MatchStrategy::CASCADE {
        let results = strategy.apply(candidates, &normalized, field);
        if !results.is_empty() {
            debug!(strategy = %strategy, before = candidates.len(), after = results.len(), "selection matched");
            return FilterOutcome {
                results,
                strategy: Some(strategy),
                normalized,
            };
        }
    }

    debug!(before = candidates.len(), "selection matched nothing");
    FilterOutcome {
        results: CandidateSet::new(),
        strategy: None,
        normalized,
    }
}
