use std::sync::Arc;

use circuit_core::models::*;

fn rec(id: &str, path: &str, name: &str) -> Arc<Record> {
    Arc::new(Record::new(id, path, name))
}

#[test]
fn candidate_set_drops_duplicate_ids_keeping_first() {
    let set = CandidateSet::from_records(vec![
        rec("A", "东风->仪表", "first"),
        rec("B", "东风->发动机", "b"),
        rec("A", "东风->仪表", "second"),
    ]);
    assert_eq!(set.ids(), vec!["A", "B"]);
    assert_eq!(set.get(0).unwrap().display_name, "first");
}

#[test]
fn candidate_set_batch_clamps_to_bounds() {
    let set: CandidateSet = (0..7)
        .map(|i| rec(&i.to_string(), "p", "n"))
        .collect();
    assert_eq!(set.batch(0, 5).len(), 5);
    assert_eq!(set.batch(5, 5).len(), 2);
    assert!(set.batch(7, 5).is_empty());
    assert!(set.batch(100, 5).is_empty());
}

#[test]
fn candidate_set_clone_is_independent() {
    let original = CandidateSet::from_records(vec![rec("A", "p", "n"), rec("B", "p", "n")]);
    let copy = original.clone();
    let narrowed = original.filter(|r| r.id == "A");
    assert_eq!(copy.len(), 2);
    assert_eq!(narrowed.len(), 1);
}

#[test]
fn field_parses_labels_and_defaults_to_display_name() {
    assert_eq!(Field::parse("层级路径"), Some(Field::HierarchyPath));
    assert_eq!(Field::parse("关联文件名称"), Some(Field::DisplayName));
    assert_eq!(Field::parse("unknown"), None);
    assert_eq!(Field::parse_or_default("unknown"), Field::DisplayName);
}

#[test]
fn intent_unknown_label_is_other() {
    assert_eq!(Intent::from_label("new_search"), Intent::NewSearch);
    assert_eq!(Intent::from_label("PROVIDE_CLUE"), Intent::ProvideClue);
    assert_eq!(Intent::from_label("option_selection"), Intent::Other);
}

#[test]
fn intent_classification_accepts_additional_info_alias() {
    let json = r#"{
        "intent": "provide_clue",
        "confidence": "high",
        "reasoning": "narrowing",
        "additional_info": { "clue_keywords": ["天龙"] }
    }"#;
    let parsed: IntentClassification = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.intent, Intent::ProvideClue);
    assert_eq!(parsed.confidence, Confidence::High);
    assert_eq!(parsed.extra.clue_keywords, Some(vec!["天龙".to_string()]));
}

#[test]
fn question_response_serializes_with_wire_names() {
    let resp = Response::question(
        "请选择",
        vec!["仪表".into()],
        Field::DisplayName,
        FilterLogic::Contains,
    );
    let v = serde_json::to_value(&resp).unwrap();
    assert_eq!(v["type"], "question");
    assert_eq!(v["filterField"], "关联文件名称");
    assert_eq!(v["filterLogic"], "包含");
    assert_eq!(v["hasResults"], false);
}

#[test]
fn results_response_counts_results() {
    let resp = Response::results("ok", vec![Record::new("A", "p", "n").view()]);
    let v = serde_json::to_value(&resp).unwrap();
    assert_eq!(v["type"], "results");
    assert_eq!(v["resultsCount"], 1);
    assert_eq!(v["hasResults"], true);
    assert_eq!(v["results"][0]["displayName"], "n");
}

#[test]
fn reset_response_requests_history_clear() {
    let v = serde_json::to_value(Response::reset("done")).unwrap();
    assert_eq!(v["type"], "reset");
    assert_eq!(v["shouldClearHistory"], true);
}

#[test]
fn unchanged_correction_is_low_confidence() {
    let c = QueryCorrection::unchanged("小忪", "failed");
    assert!(!c.is_changed());
    assert_eq!(c.confidence, Confidence::Low);
}
