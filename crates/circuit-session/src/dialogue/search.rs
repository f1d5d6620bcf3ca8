//! Free-text turns: classification, new searches, clues, small talk.

use circuit_core::models::{Intent, IntentClassification, IntentContext, Response};
use circuit_observability::retrieval_span;
use circuit_retrieval::{apply_clues, RetrievalEngine};
use tracing::{debug, info};

use super::DialogueEngine;
use crate::messages;
use crate::state::DialogueState;

impl DialogueEngine {
    pub(super) fn classify_and_dispatch(&self, state: &mut DialogueState, text: &str) -> Response {
        state.push_user(text);

        let context = IntentContext {
            current_query: state.current_query.clone(),
            current_question: state.current_question.as_ref().map(|q| q.question.clone()),
            available_options: state.available_options.clone(),
            previous_questions_count: state.previous_questions.len(),
        };
        let classification = self.nlu.classify_intent(&context, text);
        info!(
            intent = classification.intent.as_str(),
            confidence = ?classification.confidence,
            "intent classified"
        );

        match classification.intent {
            Intent::NewSearch => {
                let query = new_query(&classification, text);
                self.new_search(state, &query)
            }
            Intent::ProvideClue => self.provide_clue(state, &classification, text),
            Intent::Other => self.friendly_reply(state),
        }
    }

    /// Snapshot, search from scratch, then present the results.
    fn new_search(&self, state: &mut DialogueState, query: &str) -> Response {
        state.save_state();

        let keywords = self.nlu.extract_keywords(query);
        let results = {
            let _span = retrieval_span!(&keywords).entered();
            RetrievalEngine::new(&self.index).search(&keywords)
        };
        info!(query, results = results.len(), "new search");

        state.current_query = query.to_string();
        state.keywords = keywords;
        state.current_results = Some(results.clone());
        state.all_search_results = Some(results);
        state.clear_question();
        state.analysis_start_index = 0;
        state.in_guidance_process = false;

        self.present_results(state)
    }

    /// Narrow the latest search baseline with clue keywords.
    fn provide_clue(
        &self,
        state: &mut DialogueState,
        classification: &IntentClassification,
        text: &str,
    ) -> Response {
        let baseline = match state.all_search_results.as_ref() {
            Some(b) if !b.is_empty() => b.clone(),
            _ => {
                debug!("clue without a baseline, searching instead");
                return self.new_search(state, text);
            }
        };
        state.save_state();

        let clues = match &classification.extra.clue_keywords {
            Some(k) if k.iter().any(|c| !c.trim().is_empty()) => k.clone(),
            _ => vec![text.to_string()],
        };
        let narrowed = apply_clues(&baseline, &clues);
        info!(clues = ?clues, before = baseline.len(), after = narrowed.len(), "clue applied");

        state.current_query = format!("{} {}", state.current_query, text)
            .trim()
            .to_string();
        state.current_results = Some(narrowed);
        state.clear_question();
        state.analysis_start_index = 0;
        state.in_guidance_process = false;

        self.present_results(state)
    }

    /// Redirect small talk back to search. Leaves search state alone.
    fn friendly_reply(&self, state: &mut DialogueState) -> Response {
        let choices = messages::FRIENDLY_RESPONSES;
        let picked = self.picker.pick(choices.len()) % choices.len();
        let mut content = choices[picked].to_string();
        if !state.current_query.is_empty() {
            content.push_str(&messages::current_search_note(&state.current_query));
        }
        state.push_assistant(content.as_str());
        Response::message(content)
    }
}

fn new_query(classification: &IntentClassification, text: &str) -> String {
    classification
        .extra
        .new_query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(text)
        .to_string()
}
