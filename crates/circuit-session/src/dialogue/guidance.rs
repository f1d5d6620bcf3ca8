//! Result handling and guided narrowing.

use circuit_core::constants::more_option_label;
use circuit_core::models::{AnsweredQuestion, CandidateSet, Response};
use circuit_retrieval::{filter_by_selection, format::format_final_results};
use tracing::{debug, info};

use super::DialogueEngine;
use crate::messages;
use crate::state::DialogueState;

impl DialogueEngine {
    /// Present `current_results`: directly when small, through a question otherwise.
    pub(super) fn present_results(&self, state: &mut DialogueState) -> Response {
        let total = state.result_count();
        if total == 0 {
            state.push_assistant(messages::NO_RESULTS);
            return Response::message(messages::NO_RESULTS);
        }
        if total <= self.config.max_results_display {
            return self.show_all(state);
        }
        state.in_guidance_process = true;
        state.analysis_start_index = 0;
        self.guide(state)
    }

    fn show_all(&self, state: &mut DialogueState) -> Response {
        let results = state.current_results.clone().unwrap_or_default();
        let content = format_final_results(results.records());
        state.in_guidance_process = false;
        state.push_assistant(content.as_str());
        Response::results(content, results.views())
    }

    /// Ask a question over the batch starting at `analysis_start_index`.
    fn guide(&self, state: &mut DialogueState) -> Response {
        let results = state.current_results.clone().unwrap_or_default();
        let total = results.len();
        let start = state.analysis_start_index.min(total);
        let batch = results.batch(start, self.config.max_results_analysis);
        let end = start + batch.len();
        let remaining = total - end;

        let mut spec = self
            .nlu
            .design_question(&state.current_query, batch, &state.previous_questions);
        if spec.options.is_empty() {
            debug!(start, total, "designed question has no options, presenting results");
            state.clear_question();
            return self.show_all(state);
        }

        let designed_cap = self
            .config
            .max_options_display
            .saturating_sub(usize::from(remaining > 0))
            .max(1);
        spec.options.truncate(designed_cap);

        let mut options = spec.options.clone();
        let more_option = (remaining > 0).then(|| more_option_label(remaining));
        if let Some(more) = &more_option {
            options.push(more.clone());
        }
        info!(
            start,
            end,
            total,
            options = options.len(),
            field = %spec.filter_field,
            "guidance question"
        );

        let content = format!(
            "{}{}\n\n{}",
            spec.analysis,
            messages::batch_info(start, end, total, remaining),
            spec.question
        );
        let field = spec.filter_field;
        let logic = spec.filter_logic;

        state.analysis_start_index = start;
        state.current_question = Some(spec);
        state.available_options = options.clone();
        state.more_option = more_option;
        state.push_assistant(content.as_str());

        Response::question(content, options, field, logic)
    }

    pub(super) fn select_option(&self, state: &mut DialogueState, selection: &str) -> Response {
        let Some(question) = state.current_question.clone() else {
            return Response::message(messages::NO_PENDING_QUESTION);
        };
        state.save_state();
        state.push_user(selection);

        if state.more_option.as_deref() == Some(selection) {
            let total = state.result_count();
            state.analysis_start_index =
                (state.analysis_start_index + self.config.max_results_analysis).min(total);
            if state.analysis_start_index < total {
                return self.guide(state);
            }
            state.clear_question();
            state.push_assistant(messages::NO_MORE_RESULTS);
            return Response::message(messages::NO_MORE_RESULTS);
        }

        let current = state.current_results.clone().unwrap_or_default();
        let narrowed: CandidateSet = filter_by_selection(
            &current,
            selection,
            question.filter_field,
            question.filter_logic,
        );
        info!(selection, before = current.len(), after = narrowed.len(), "option applied");

        state
            .previous_questions
            .push(AnsweredQuestion::from_spec(&question, selection));
        state.clear_question();
        state.current_results = Some(narrowed);
        state.analysis_start_index = 0;

        if state.has_results() {
            self.present_results(state)
        } else {
            state.in_guidance_process = false;
            let content = messages::no_match_for_choice(selection);
            state.push_assistant(content.as_str());
            Response::message(content)
        }
    }

    pub(super) fn go_back(&self, state: &mut DialogueState) -> Response {
        if !state.restore_state() {
            return Response::message(messages::BACK_AT_FIRST_STEP);
        }
        info!(undo_depth = state.undo_depth(), "restored previous step");

        if let Some(question) = &state.current_question {
            let content = format!(
                "{}\n\n{}\n\n{}",
                messages::BACK_PREFIX,
                question.analysis,
                question.question
            );
            return Response::question(
                content,
                state.available_options.clone(),
                question.filter_field,
                question.filter_logic,
            );
        }
        if state.has_results() {
            return self.present_results(state);
        }
        Response::message(messages::BACK_CONTINUE)
    }
}
