//! Property tests for session state and dialogue bounds.

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use circuit_core::models::{CandidateSet, Record, Response, Role};
use circuit_session::DialogueState;
use proptest::prelude::*;
use test_fixtures::bulk_records;

fn candidates(ids: &[String]) -> CandidateSet {
    CandidateSet::from_records(ids.iter().map(|id| Arc::new(Record::new(id.as_str(), "p", "n"))))
}

// ── Undo round trip ──

proptest! {
    #[test]
    fn restore_returns_exact_snapshot(
        query in "[a-z\u{4e00}-\u{4e20}]{0,8}",
        ids in prop::collection::vec("[A-Z][0-9]{2}", 0..10),
        mutated in "[a-z]{1,8}",
        depth in 0usize..5,
    ) {
        let mut state = DialogueState::new("s", 10);
        for _ in 0..depth {
            state.save_state();
        }
        state.current_query = query;
        state.current_results = Some(candidates(&ids));
        let before = state.snapshot();

        state.save_state();
        state.current_query = mutated.clone();
        state.keywords.push(mutated);
        state.current_results = None;
        state.push_user("x");

        prop_assert!(state.restore_state());
        prop_assert_eq!(state.snapshot(), before);
        prop_assert_eq!(state.undo_depth(), depth);
    }
}

// ── Undo capacity ──

proptest! {
    #[test]
    fn undo_depth_never_exceeds_capacity(capacity in 1usize..15, pushes in 0usize..40) {
        let mut state = DialogueState::new("s", capacity);
        for i in 0..pushes {
            state.current_query = format!("q{i}");
            state.save_state();
        }
        prop_assert_eq!(state.undo_depth(), pushes.min(capacity));
        if pushes > capacity {
            let oldest = state.undo_stack().oldest().unwrap();
            prop_assert_eq!(&oldest.current_query, &format!("q{}", pushes - capacity));
        }
    }
}

// ── Reset ──

proptest! {
    #[test]
    fn reset_leaves_at_most_a_greeting(greet in any::<bool>(), turns in 0usize..6) {
        let engine = common::scripted_engine(bulk_records(12));
        if greet {
            engine.greet("s");
        }
        for i in 0..turns {
            engine.process_query("s", if i % 2 == 0 { "东风" } else { "你好" });
        }
        engine.reset("s");

        let handle = engine.sessions().get("s").unwrap();
        let state = handle.lock().unwrap();
        prop_assert!(state.conversation_history.len() <= 1);
        if let Some(first) = state.conversation_history.first() {
            prop_assert_eq!(first.role, Role::Assistant);
        }
        prop_assert_eq!(state.undo_depth(), 0);
    }
}

// ── Guidance bounds ──

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn question_options_stay_within_display_limit(n in 6usize..120, steps in 0usize..6) {
        let engine = common::scripted_engine(bulk_records(n));
        let mut response = engine.process_query("s", "东风");

        for _ in 0..steps {
            let Response::Question { options, .. } = &response else { break };
            prop_assert!(options.len() <= 6);
            prop_assert!(!options.is_empty());
            let Some(more) = options.iter().find(|o| o.starts_with("其他")).cloned() else { break };
            response = engine.handle_option_selection("s", &more);
        }

        let handle = engine.sessions().get("s").unwrap();
        let state = handle.lock().unwrap();
        prop_assert!(state.analysis_start_index <= state.result_count());
        prop_assert_eq!(state.current_question.is_some(), !state.available_options.is_empty());
    }
}
