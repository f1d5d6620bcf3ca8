//! Property tests for core model invariants.

use std::collections::HashSet;
use std::sync::Arc;

use circuit_core::models::{CandidateSet, Field, Intent, Record};
use proptest::prelude::*;

fn records(ids: &[String]) -> Vec<Arc<Record>> {
    ids.iter()
        .map(|id| Arc::new(Record::new(id.as_str(), "东风->仪表", "仪表电路图")))
        .collect()
}

// ── CandidateSet ──

proptest! {
    #[test]
    fn from_records_keeps_first_occurrence_order(ids in prop::collection::vec("[A-E]", 0..30)) {
        let set = CandidateSet::from_records(records(&ids));

        let mut seen = HashSet::new();
        let expected: Vec<&str> = ids
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect();
        prop_assert_eq!(set.ids(), expected);
    }

    #[test]
    fn batch_never_exceeds_bounds(n in 0usize..50, start in 0usize..80, size in 0usize..30) {
        let ids: Vec<String> = (0..n).map(|i| format!("R{i}")).collect();
        let set = CandidateSet::from_records(records(&ids));
        let batch = set.batch(start, size);

        prop_assert!(batch.len() <= size);
        prop_assert_eq!(batch.len(), n.saturating_sub(start).min(size));
        if let Some(first) = batch.first() {
            prop_assert_eq!(&first.id, &format!("R{start}"));
        }
    }
}

// ── Labels ──

proptest! {
    #[test]
    fn unknown_intent_labels_are_other(label in "[a-z_]{0,12}") {
        prop_assume!(label != "new_search" && label != "provide_clue");
        prop_assert_eq!(Intent::from_label(&label), Intent::Other);
    }

    #[test]
    fn field_parse_or_default_is_total(label in ".{0,12}") {
        let field = Field::parse_or_default(&label);
        prop_assert!(Field::ALL.contains(&field));
    }
}
