//! DialogueEngine: turn entry points over the session table.
//!
//! Every entry point returns a [`Response`]; nothing inside a turn reaches
//! the caller as an error. A turn holds only its own session's lock.

mod guidance;
mod search;
mod summary;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use circuit_core::config::{CircuitConfig, DialogueConfig};
use circuit_core::constants::{CONTROL_BACK, CONTROL_RESET};
use circuit_core::errors::CircuitResult;
use circuit_core::models::{DegradationEvent, QueryCorrection, Response};
use circuit_core::traits::ResponsePicker;
use circuit_index::DatasetIndex;
use circuit_nlu::NluChain;
use circuit_observability::{dialogue_span, TurnLog, TurnLogEntry, TurnSummary};
use tracing::{debug, info};

use crate::manager::{SessionHandle, SessionManager};
use crate::messages;
use crate::picker::SeededPicker;
use crate::state::DialogueState;

pub use summary::EngineStatus;

pub struct DialogueEngine {
    index: Arc<DatasetIndex>,
    nlu: Arc<NluChain>,
    sessions: SessionManager,
    picker: Box<dyn ResponsePicker>,
    config: DialogueConfig,
    turn_log: Mutex<TurnLog>,
}

fn lock(handle: &SessionHandle) -> MutexGuard<'_, DialogueState> {
    handle.lock().unwrap_or_else(|e| e.into_inner())
}

impl DialogueEngine {
    pub fn new(
        index: Arc<DatasetIndex>,
        nlu: Arc<NluChain>,
        config: DialogueConfig,
        turn_log_capacity: usize,
    ) -> Self {
        Self {
            index,
            nlu,
            sessions: SessionManager::new(config.undo_capacity),
            picker: Box::new(SeededPicker::new(config.response_seed)),
            config,
            turn_log: Mutex::new(TurnLog::with_capacity(turn_log_capacity)),
        }
    }

    /// Load the dataset and build the NLU chain from configuration.
    /// Dataset failures are fatal.
    pub fn from_config(config: &CircuitConfig) -> CircuitResult<Self> {
        let index = DatasetIndex::from_config(&config.dataset)?;
        info!(
            records = index.len(),
            fingerprint = index.fingerprint(),
            "dataset loaded"
        );
        let nlu = NluChain::from_config(&config.nlu);
        Ok(Self::new(
            Arc::new(index),
            Arc::new(nlu),
            config.dialogue.clone(),
            config.observability.turn_log_capacity,
        ))
    }

    /// Replace the friendly-response picker.
    pub fn with_picker(mut self, picker: impl ResponsePicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn config(&self) -> &DialogueConfig {
        &self.config
    }

    /// Run `f` on the locked session and log the turn.
    fn with_session(
        &self,
        session_id: &str,
        operation: &str,
        f: impl FnOnce(&Self, &mut DialogueState) -> Response,
    ) -> Response {
        let _span = dialogue_span!(session_id, operation).entered();
        let started = Instant::now();
        let handle = self.sessions.get_or_create(session_id);
        let mut state = lock(&handle);
        let response = f(self, &mut *state);
        let result_count = state.result_count();
        drop(state);

        debug!(kind = response.kind(), result_count, "turn complete");
        self.turn_log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record(TurnLogEntry::new(
                session_id,
                operation,
                response.kind(),
                result_count,
                started.elapsed(),
            ));
        response
    }

    /// Handle free text: control tokens, then intent classification.
    pub fn process_query(&self, session_id: &str, text: &str) -> Response {
        let text = text.trim();
        match text {
            "" => Response::message(messages::EMPTY_INPUT),
            CONTROL_BACK => self.back(session_id),
            CONTROL_RESET => self.reset(session_id),
            _ => self.with_session(session_id, "process_query", |engine, state| {
                engine.classify_and_dispatch(state, text)
            }),
        }
    }

    /// Apply a chosen option of the pending question.
    pub fn handle_option_selection(&self, session_id: &str, selection: &str) -> Response {
        let selection = selection.trim();
        self.with_session(session_id, "handle_option_selection", |engine, state| {
            engine.select_option(state, selection)
        })
    }

    /// Route raw input: an exact pending option is a selection, anything
    /// else goes through [`Self::process_query`].
    pub fn handle_message(&self, session_id: &str, text: &str) -> Response {
        let text = text.trim();
        if text.is_empty() {
            return Response::message(messages::EMPTY_INPUT);
        }
        let is_option = {
            let handle = self.sessions.get_or_create(session_id);
            let state = lock(&handle);
            let found = state.available_options.iter().any(|o| o == text);
            found
        };
        if is_option {
            self.handle_option_selection(session_id, text)
        } else {
            self.process_query(session_id, text)
        }
    }

    /// Undo the last state-changing turn.
    pub fn back(&self, session_id: &str) -> Response {
        self.with_session(session_id, "back", |engine, state| engine.go_back(state))
    }

    /// Clear the session, keeping a leading greeting.
    pub fn reset(&self, session_id: &str) -> Response {
        self.with_session(session_id, "reset", |_, state| {
            state.clear();
            info!(session_id = %state.session_id, "session reset");
            Response::reset(messages::RESET_DONE)
        })
    }

    /// Greeting message. Seeds the history when the session has none.
    pub fn greet(&self, session_id: &str) -> Response {
        self.with_session(session_id, "greet", |_, state| {
            if state.conversation_history.is_empty() {
                state.push_assistant(messages::GREETING);
            }
            Response::message(messages::GREETING)
        })
    }

    /// Correct typos in a raw query. Does not touch any session.
    pub fn correct_query(&self, raw: &str) -> QueryCorrection {
        self.nlu.correct_query(raw.trim())
    }

    /// Take the degradation events recorded by the NLU chain.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.nlu.drain_events()
    }

    pub fn turn_summary(&self) -> TurnSummary {
        self.turn_log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .summary()
    }
}
