use serde::{Deserialize, Serialize};

use super::field::{Field, FilterLogic};

/// A clarifying question designed for a batch of candidates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Short analysis of the batch, shown before the question.
    pub analysis: String,
    pub question: String,
    pub options: Vec<String>,
    pub filter_field: Field,
    pub filter_logic: FilterLogic,
    /// Designer's rationale. Audit only.
    #[serde(default)]
    pub reasoning: String,
}

/// A question the user already answered. Fed back to question design to avoid repeats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub filter_field: Field,
    pub filter_logic: FilterLogic,
    pub user_choice: String,
}

impl AnsweredQuestion {
    pub fn from_spec(spec: &QuestionSpec, user_choice: impl Into<String>) -> Self {
        Self {
            question: spec.question.clone(),
            options: spec.options.clone(),
            filter_field: spec.filter_field,
            filter_logic: spec.filter_logic,
            user_choice: user_choice.into(),
        }
    }
}
