//! Read-only views: result summary and engine status.

use serde::Serialize;

use circuit_observability::TurnSummary;

use super::{lock, DialogueEngine};
use crate::messages;

/// Snapshot of the engine for status displays.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub records: usize,
    pub fingerprint: String,
    pub sessions: usize,
    pub nlu_provider: String,
    pub turns: TurnSummary,
}

impl DialogueEngine {
    /// List every current candidate of a session. Makes no NLU call and
    /// does not change state.
    pub fn current_results_summary(&self, session_id: &str) -> String {
        let Some(handle) = self.sessions.get(session_id) else {
            return messages::NO_CURRENT_RESULTS.to_string();
        };
        let state = lock(&handle);
        let Some(results) = state.current_results.as_ref().filter(|r| !r.is_empty()) else {
            return messages::NO_CURRENT_RESULTS.to_string();
        };

        let mut out = format!("📊 **当前搜索结果（共 {} 条）**\n\n", results.len());
        for (i, record) in results.iter().enumerate() {
            out.push_str(&format!("**{}.** `{}` - {}\n", i + 1, record.id, record.display_name));
        }
        if !state.current_query.is_empty() {
            out.push_str(&format!("\n🔍 **搜索查询：** {}", state.current_query));
        }
        if !state.keywords.is_empty() {
            out.push_str(&format!("\n📝 **关键词：** {}", state.keywords.join("、")));
        }
        if !state.previous_questions.is_empty() {
            let choices: Vec<&str> = state
                .previous_questions
                .iter()
                .map(|q| q.user_choice.as_str())
                .collect();
            out.push_str(&format!("\n🔧 **已选择：** {}", choices.join(" → ")));
        }
        out
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            records: self.index.len(),
            fingerprint: self.index.fingerprint().to_string(),
            sessions: self.sessions.session_count(),
            nlu_provider: self.nlu.active_provider_name().to_string(),
            turns: self.turn_summary(),
        }
    }
}
