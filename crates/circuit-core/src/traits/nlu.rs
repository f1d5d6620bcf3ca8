use std::sync::Arc;

use crate::errors::CircuitResult;
use crate::models::{
    AnsweredQuestion, IntentClassification, IntentContext, QueryCorrection, QuestionSpec, Record,
};

/// Natural-language understanding capability.
///
/// Implementations may be slow and may fail; callers are expected to wrap
/// them in a fallback chain rather than surface errors to the user.
pub trait INluProvider: Send + Sync {
    /// Classify a free-text turn as a new search, a clue, or something else.
    fn classify_intent(
        &self,
        context: &IntentContext,
        text: &str,
    ) -> CircuitResult<IntentClassification>;

    /// Extract search keywords from a query.
    fn extract_keywords(&self, query: &str) -> CircuitResult<Vec<String>>;

    /// Design a clarifying question over a batch of candidates.
    fn design_question(
        &self,
        query: &str,
        batch: &[Arc<Record>],
        previous: &[AnsweredQuestion],
    ) -> CircuitResult<QuestionSpec>;

    /// Correct typos and shorthand in a raw query.
    fn correct_query(&self, raw: &str) -> CircuitResult<QueryCorrection>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
