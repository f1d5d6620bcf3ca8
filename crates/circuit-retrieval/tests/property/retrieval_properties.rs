use circuit_core::models::{Field, FilterLogic, Record};
use circuit_index::{contains_ignore_case, DatasetIndex};
use circuit_retrieval::search::pairwise_union_intersection;
use circuit_retrieval::{filter_by_selection, RetrievalEngine};
use proptest::prelude::*;

const VOCAB: &[&str] = &["东风", "三一", "徐工", "仪表", "发动机", "底盘", "BCM", "针脚", "电路图"];

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (
            prop::sample::subsequence(VOCAB.to_vec(), 1..4),
            prop::sample::subsequence(VOCAB.to_vec(), 1..4),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (path, name))| Record::new(format!("{i}"), path.join("->"), name.concat()))
            .collect()
    })
}

fn arb_keywords() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(VOCAB.to_vec()).prop_map(String::from),
            "[a-z]{1,3}",
        ],
        0..5,
    )
}

// ── Empty keyword list finds nothing ──────────────────────────────────────

proptest! {
    #[test]
    fn empty_keywords_yield_empty(records in arb_records()) {
        let index = DatasetIndex::from_records(records);
        prop_assert!(RetrievalEngine::new(&index).search(&[]).is_empty());
    }
}

// ── One valid keyword contributes exactly its match set ───────────────────

proptest! {
    #[test]
    fn single_valid_keyword_contributes_its_matches(
        records in arb_records(),
        kw in prop::sample::select(VOCAB.to_vec()),
    ) {
        let index = DatasetIndex::from_records(records);
        let keywords = vec![kw.to_string(), "zzz_never".to_string()];
        for field in Field::ALL {
            let got: Vec<usize> = pairwise_union_intersection(&index, field, &keywords)
                .into_iter()
                .collect();
            prop_assert_eq!(got, index.positions_matching(field, kw));
        }
    }
}

// ── Every result matches some keyword in some field ───────────────────────

proptest! {
    #[test]
    fn results_match_some_keyword(records in arb_records(), keywords in arb_keywords()) {
        let index = DatasetIndex::from_records(records);
        let results = RetrievalEngine::new(&index).search(&keywords);
        for r in results.iter() {
            let hit = keywords.iter().any(|kw| {
                Field::ALL.iter().any(|&f| contains_ignore_case(r.field(f), kw))
            });
            prop_assert!(hit, "record {} matches no keyword", r.id);
        }
    }
}

// ── Search is deterministic ───────────────────────────────────────────────

proptest! {
    #[test]
    fn search_is_deterministic(records in arb_records(), keywords in arb_keywords()) {
        let index = DatasetIndex::from_records(records);
        let engine = RetrievalEngine::new(&index);
        prop_assert_eq!(engine.search(&keywords), engine.search(&keywords));
    }
}

// ── Filtering never adds records ──────────────────────────────────────────

proptest! {
    #[test]
    fn filter_result_is_subset(
        records in arb_records(),
        selection in prop::sample::select(VOCAB.to_vec()),
    ) {
        let index = DatasetIndex::from_records(records);
        let all = index.all();
        let out = filter_by_selection(&all, selection, Field::DisplayName, FilterLogic::Contains);
        prop_assert!(out.len() <= all.len());
        for r in out.iter() {
            prop_assert!(all.contains_id(&r.id));
        }
    }
}
