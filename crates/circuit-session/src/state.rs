//! Per-session dialogue state and its undo stack.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use circuit_core::models::{
    AnsweredQuestion, CandidateSet, HistoryEntry, QuestionSpec, Role,
};

/// Independent copy of every undoable field of a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogueSnapshot {
    pub current_query: String,
    pub keywords: Vec<String>,
    pub current_results: Option<CandidateSet>,
    pub all_search_results: Option<CandidateSet>,
    pub current_question: Option<QuestionSpec>,
    pub available_options: Vec<String>,
    pub more_option: Option<String>,
    pub previous_questions: Vec<AnsweredQuestion>,
    pub analysis_start_index: usize,
    pub in_guidance_process: bool,
    pub conversation_history: Vec<HistoryEntry>,
}

/// Bounded LIFO of snapshots. Past capacity the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct UndoStack {
    entries: VecDeque<DialogueSnapshot>,
    capacity: usize,
}

impl UndoStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, snapshot: DialogueSnapshot) {
        self.entries.push_back(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn pop(&mut self) -> Option<DialogueSnapshot> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest retained snapshot.
    pub fn oldest(&self) -> Option<&DialogueSnapshot> {
        self.entries.front()
    }
}

/// Live state of one conversation.
///
/// `current_question` is set exactly when `available_options` is non-empty,
/// and `analysis_start_index` never exceeds the current result count.
#[derive(Debug, Clone)]
pub struct DialogueState {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub current_query: String,
    pub keywords: Vec<String>,
    pub current_results: Option<CandidateSet>,
    /// Baseline of the latest search. Clues narrow from here.
    pub all_search_results: Option<CandidateSet>,
    pub current_question: Option<QuestionSpec>,
    pub available_options: Vec<String>,
    /// Exact label of the synthetic "more results" option, when offered.
    pub more_option: Option<String>,
    /// Every answered question since the last reset, across searches.
    pub previous_questions: Vec<AnsweredQuestion>,
    pub analysis_start_index: usize,
    pub in_guidance_process: bool,
    pub conversation_history: Vec<HistoryEntry>,
    undo: UndoStack,
}

impl DialogueState {
    pub fn new(session_id: impl Into<String>, undo_capacity: usize) -> Self {
        Self {
            session_id: session_id.into(),
            created_at: Utc::now(),
            current_query: String::new(),
            keywords: Vec::new(),
            current_results: None,
            all_search_results: None,
            current_question: None,
            available_options: Vec::new(),
            more_option: None,
            previous_questions: Vec::new(),
            analysis_start_index: 0,
            in_guidance_process: false,
            conversation_history: Vec::new(),
            undo: UndoStack::new(undo_capacity),
        }
    }

    pub fn snapshot(&self) -> DialogueSnapshot {
        DialogueSnapshot {
            current_query: self.current_query.clone(),
            keywords: self.keywords.clone(),
            current_results: self.current_results.clone(),
            all_search_results: self.all_search_results.clone(),
            current_question: self.current_question.clone(),
            available_options: self.available_options.clone(),
            more_option: self.more_option.clone(),
            previous_questions: self.previous_questions.clone(),
            analysis_start_index: self.analysis_start_index,
            in_guidance_process: self.in_guidance_process,
            conversation_history: self.conversation_history.clone(),
        }
    }

    fn apply(&mut self, s: DialogueSnapshot) {
        self.current_query = s.current_query;
        self.keywords = s.keywords;
        self.current_results = s.current_results;
        self.all_search_results = s.all_search_results;
        self.current_question = s.current_question;
        self.available_options = s.available_options;
        self.more_option = s.more_option;
        self.previous_questions = s.previous_questions;
        self.analysis_start_index = s.analysis_start_index;
        self.in_guidance_process = s.in_guidance_process;
        self.conversation_history = s.conversation_history;
    }

    /// Push a snapshot of the current state onto the undo stack.
    pub fn save_state(&mut self) {
        let snapshot = self.snapshot();
        self.undo.push(snapshot);
    }

    /// Pop the latest snapshot and restore it. `false` if the stack is empty.
    pub fn restore_state(&mut self) -> bool {
        match self.undo.pop() {
            Some(s) => {
                self.apply(s);
                true
            }
            None => false,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo
    }

    /// Drop the pending question and its options.
    pub fn clear_question(&mut self) {
        self.current_question = None;
        self.available_options.clear();
        self.more_option = None;
    }

    /// Clear everything, keeping only a leading assistant greeting.
    pub fn clear(&mut self) {
        let greeting = self
            .conversation_history
            .first()
            .filter(|e| e.role == Role::Assistant)
            .cloned();
        self.apply(DialogueSnapshot::default());
        self.conversation_history = greeting.into_iter().collect();
        self.undo.clear();
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.conversation_history.push(HistoryEntry::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.conversation_history
            .push(HistoryEntry::assistant(content));
    }

    /// Number of current candidates, zero when there is no result set.
    pub fn result_count(&self) -> usize {
        self.current_results.as_ref().map_or(0, CandidateSet::len)
    }

    pub fn has_results(&self) -> bool {
        self.result_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_core::models::Record;
    use std::sync::Arc;

    fn results(ids: &[&str]) -> CandidateSet {
        CandidateSet::from_records(ids.iter().map(|id| Arc::new(Record::new(*id, "p", "n"))))
    }

    #[test]
    fn restore_round_trips_state() {
        let mut state = DialogueState::new("s", 10);
        state.current_query = "东风".into();
        state.current_results = Some(results(&["A", "B"]));
        let before = state.snapshot();

        state.save_state();
        state.current_query = "徐工".into();
        state.current_results = Some(results(&["C"]));
        state.push_user("徐工");

        assert!(state.restore_state());
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.undo_depth(), 0);
    }

    #[test]
    fn restore_on_empty_stack_is_noop() {
        let mut state = DialogueState::new("s", 10);
        state.current_query = "x".into();
        assert!(!state.restore_state());
        assert_eq!(state.current_query, "x");
    }

    #[test]
    fn snapshots_are_independent_of_later_mutation() {
        let mut state = DialogueState::new("s", 10);
        state.keywords = vec!["东风".into()];
        state.save_state();
        state.keywords.push("仪表".into());
        state.restore_state();
        assert_eq!(state.keywords, vec!["东风"]);
    }

    #[test]
    fn eleven_pushes_keep_ten_and_drop_oldest() {
        let mut state = DialogueState::new("s", 10);
        for i in 0..11 {
            state.current_query = format!("q{i}");
            state.save_state();
        }
        assert_eq!(state.undo_depth(), 10);
        assert_eq!(state.undo_stack().oldest().unwrap().current_query, "q1");
    }

    #[test]
    fn clear_keeps_leading_greeting_only() {
        let mut state = DialogueState::new("s", 10);
        state.push_assistant("欢迎");
        state.push_user("东风");
        state.push_assistant("结果");
        state.current_query = "东风".into();
        state.save_state();

        state.clear();
        assert_eq!(state.conversation_history, vec![HistoryEntry::assistant("欢迎")]);
        assert_eq!(state.current_query, "");
        assert_eq!(state.undo_depth(), 0);
    }

    #[test]
    fn clear_drops_history_not_led_by_assistant() {
        let mut state = DialogueState::new("s", 10);
        state.push_user("东风");
        state.clear();
        assert!(state.conversation_history.is_empty());
    }
}
