use serde::{Deserialize, Serialize};

use super::intent::Confidence;

/// Result of typo/shorthand correction of a raw query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryCorrection {
    pub original_query: String,
    pub corrected_query: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub confidence: Confidence,
}

impl QueryCorrection {
    /// The query passed through untouched.
    pub fn unchanged(query: &str, explanation: impl Into<String>) -> Self {
        Self {
            original_query: query.to_string(),
            corrected_query: query.to_string(),
            explanation: explanation.into(),
            confidence: Confidence::Low,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.original_query != self.corrected_query
    }
}
