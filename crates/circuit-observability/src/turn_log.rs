//! Turn logging: session, operation, response kind, result count, latency.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnLogEntry {
    pub session_id: String,
    /// Entry point that handled the turn, e.g. `process_query`.
    pub operation: String,
    /// Wire tag of the response.
    pub response_kind: String,
    /// Candidates remaining after the turn.
    pub result_count: usize,
    pub latency: Duration,
    pub timestamp_epoch_ms: i64,
}

impl TurnLogEntry {
    pub fn new(
        session_id: impl Into<String>,
        operation: impl Into<String>,
        response_kind: impl Into<String>,
        result_count: usize,
        latency: Duration,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            operation: operation.into(),
            response_kind: response_kind.into(),
            result_count,
            latency,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Aggregate view over the retained entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TurnSummary {
    pub turns: usize,
    pub results_responses: usize,
    pub question_responses: usize,
    pub avg_latency: Duration,
}

/// Bounded turn log. The oldest entries are dropped past capacity.
#[derive(Debug, Clone)]
pub struct TurnLog {
    entries: VecDeque<TurnLogEntry>,
    max_entries: usize,
}

impl TurnLog {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn record(&mut self, entry: TurnLogEntry) {
        tracing::debug!(
            event = "turn_logged",
            session_id = %entry.session_id,
            operation = %entry.operation,
            response_kind = %entry.response_kind,
            result_count = entry.result_count,
            latency_ms = entry.latency.as_millis() as u64,
            "turn logged"
        );
        self.entries.push_back(entry);
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &TurnLogEntry> {
        self.entries.iter()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn summary(&self) -> TurnSummary {
        let turns = self.entries.len();
        let count_kind = |kind: &str| self.entries.iter().filter(|e| e.response_kind == kind).count();
        let avg_latency = if turns == 0 {
            Duration::ZERO
        } else {
            self.entries.iter().map(|e| e.latency).sum::<Duration>() / turns as u32
        };
        TurnSummary {
            turns,
            results_responses: count_kind("results"),
            question_responses: count_kind("question"),
            avg_latency,
        }
    }
}

impl Default for TurnLog {
    fn default() -> Self {
        Self::with_capacity(circuit_core::config::defaults::DEFAULT_TURN_LOG_CAPACITY)
    }
}
