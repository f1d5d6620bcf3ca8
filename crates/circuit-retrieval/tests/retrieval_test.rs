//! Retrieval, selection filtering and clue narrowing over fixture datasets.

use circuit_core::models::{CandidateSet, Field, FilterLogic, Record};
use circuit_index::DatasetIndex;
use circuit_retrieval::filter::filter_with_outcome;
use circuit_retrieval::ranking::keyword_score;
use circuit_retrieval::{
    apply_clues, filter_by_selection, normalize_selection, MatchStrategy, RetrievalEngine,
};
use serde::Deserialize;
use test_fixtures::{dataset_path, load_fixture, scenario_records};

#[derive(Deserialize)]
struct GoldenSearch {
    dataset: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    keywords: Vec<String>,
    expected_ids: Vec<String>,
}

fn kw(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

fn scenario_index() -> DatasetIndex {
    DatasetIndex::from_records(scenario_records())
}

// ── Keyword needles ───────────────────────────────────────────────────────

#[test]
fn padded_keyword_is_matched_literally_by_search_and_score() {
    let index = DatasetIndex::from_records(vec![
        Record::new("A", "x", "y 仪表"),
        Record::new("B", "仪表", "仪表"),
    ]);
    let engine = RetrievalEngine::new(&index);

    let padded = kw(&[" 仪表"]);
    let results = engine.search(&padded);
    assert_eq!(results.ids(), vec!["A"]);
    for record in results.iter() {
        assert!(keyword_score(record, &padded) > 0, "{} retrieved but unscored", record.id);
    }

    assert_eq!(engine.search(&kw(&["仪表"])).ids(), vec!["B", "A"]);
    assert!(engine.search(&kw(&["  "])).is_empty());
}

// ── Scenario: A/B/C search ────────────────────────────────────────────────

#[test]
fn scenario_search_brand_and_system() {
    let index = scenario_index();
    let results = RetrievalEngine::new(&index).search(&kw(&["东风", "仪表"]));
    assert_eq!(results.ids(), vec!["A", "C"]);
}

#[test]
fn scenario_search_from_csv_matches_in_memory() {
    let index = DatasetIndex::load(dataset_path("scenario.csv"), true).unwrap();
    let results = RetrievalEngine::new(&index).search(&kw(&["东风", "仪表"]));
    assert_eq!(results.ids(), vec!["A", "C"]);
}

// ── Scenario: selection filter ────────────────────────────────────────────

#[test]
fn scenario_filter_by_display_name() {
    let index = scenario_index();
    let results = filter_by_selection(
        &index.all(),
        "仪表电路图1",
        Field::DisplayName,
        FilterLogic::Contains,
    );
    assert_eq!(results.ids(), vec!["A"]);
}

#[test]
fn scenario_normalize_hedged_option() {
    assert_eq!(
        normalize_selection("完整的仪表电路图（文件名称通常含'仪表电路图'）"),
        "仪表电路图"
    );
}

#[test]
fn cascade_stops_at_first_non_empty_strategy() {
    let index = scenario_index();
    let all = index.all();

    // Exact equality wins before containment would also match A.
    let exact = filter_with_outcome(&all, "仪表电路图1", Field::DisplayName, FilterLogic::Equals);
    assert_eq!(exact.strategy, Some(MatchStrategy::Exact));
    assert_eq!(exact.results.ids(), vec!["A"]);

    let contains = filter_with_outcome(&all, "仪表", Field::DisplayName, FilterLogic::Contains);
    assert_eq!(contains.strategy, Some(MatchStrategy::Contains));
    assert_eq!(contains.results.ids(), vec!["A", "C"]);

    let partial =
        filter_with_outcome(&all, "发动机 还有 针脚", Field::DisplayName, FilterLogic::Contains);
    assert_eq!(partial.strategy, Some(MatchStrategy::PartialKeywords));
    assert_eq!(partial.results.ids(), vec!["B", "C"]);

    let vocab = filter_with_outcome(&all, "要发动机", Field::HierarchyPath, FilterLogic::Contains);
    assert_eq!(vocab.strategy, Some(MatchStrategy::Vocabulary));
    assert_eq!(vocab.results.ids(), vec!["B"]);
}

#[test]
fn selection_matching_nothing_is_empty() {
    let index = scenario_index();
    let outcome = filter_with_outcome(
        &index.all(),
        "徐工挖掘机",
        Field::HierarchyPath,
        FilterLogic::Contains,
    );
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.strategy, None);
}

#[test]
fn filter_logic_does_not_change_outcome() {
    let index = scenario_index();
    let all = index.all();
    for selection in ["仪表", "东风", "完整的发动机文档"] {
        for field in Field::ALL {
            assert_eq!(
                filter_by_selection(&all, selection, field, FilterLogic::Contains),
                filter_by_selection(&all, selection, field, FilterLogic::Equals),
            );
        }
    }
}

#[test]
fn filter_of_empty_set_is_empty() {
    let out = filter_by_selection(&CandidateSet::new(), "仪表", Field::DisplayName, FilterLogic::Contains);
    assert!(out.is_empty());
}

// ── Clues narrow the baseline ─────────────────────────────────────────────

#[test]
fn clue_narrows_search_baseline() {
    let index = DatasetIndex::load(dataset_path("circuits.csv"), true).unwrap();
    let baseline = RetrievalEngine::new(&index).search(&kw(&["东风", "针脚"]));
    let narrowed = apply_clues(&baseline, &kw(&["天锦", "bcm"]));
    assert_eq!(narrowed.ids(), vec!["1024", "1023"]);
}

// ── Golden searches over the circuits dataset ─────────────────────────────

#[test]
fn golden_search_cases() {
    let golden: GoldenSearch = load_fixture("golden/retrieval_search.json");
    let index = DatasetIndex::load(dataset_path(&golden.dataset), true).unwrap();
    let engine = RetrievalEngine::new(&index);
    for case in golden.cases {
        let got = engine.search(&case.keywords);
        assert_eq!(got.ids(), case.expected_ids, "case {}", case.name);
    }
}
