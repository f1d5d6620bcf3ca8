use serde::{Deserialize, Serialize};

use super::field::{Field, FilterLogic};
use super::record::RecordView;

/// Outcome of a dialogue turn, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Message {
        content: String,
    },
    #[serde(rename_all = "camelCase")]
    Question {
        content: String,
        options: Vec<String>,
        filter_field: Field,
        filter_logic: FilterLogic,
        has_results: bool,
    },
    #[serde(rename_all = "camelCase")]
    Results {
        content: String,
        results: Vec<RecordView>,
        has_results: bool,
        results_count: usize,
    },
    #[serde(rename_all = "camelCase")]
    Reset {
        content: String,
        should_clear_history: bool,
    },
}

impl Response {
    pub fn message(content: impl Into<String>) -> Self {
        Response::Message {
            content: content.into(),
        }
    }

    pub fn question(
        content: impl Into<String>,
        options: Vec<String>,
        filter_field: Field,
        filter_logic: FilterLogic,
    ) -> Self {
        Response::Question {
            content: content.into(),
            options,
            filter_field,
            filter_logic,
            has_results: false,
        }
    }

    pub fn results(content: impl Into<String>, results: Vec<RecordView>) -> Self {
        let results_count = results.len();
        Response::Results {
            content: content.into(),
            results,
            has_results: true,
            results_count,
        }
    }

    pub fn reset(content: impl Into<String>) -> Self {
        Response::Reset {
            content: content.into(),
            should_clear_history: true,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Response::Message { content }
            | Response::Question { content, .. }
            | Response::Results { content, .. }
            | Response::Reset { content, .. } => content,
        }
    }

    /// Short name of the variant, matching the wire tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Response::Message { .. } => "message",
            Response::Question { .. } => "question",
            Response::Results { .. } => "results",
            Response::Reset { .. } => "reset",
        }
    }
}
