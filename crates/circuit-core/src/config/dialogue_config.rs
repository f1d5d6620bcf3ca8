use serde::{Deserialize, Serialize};

use super::defaults;

/// Dialogue state machine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Result sets at or below this size are presented directly.
    pub max_results_display: usize,
    /// Batch size handed to question design during guided narrowing.
    pub max_results_analysis: usize,
    /// Maximum number of options shown with a question, synthetic option included.
    pub max_options_display: usize,
    /// Undo stack capacity per session.
    pub undo_capacity: usize,
    /// Seed for the friendly-response picker. `None` seeds from entropy.
    pub response_seed: Option<u64>,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            max_results_display: defaults::DEFAULT_MAX_RESULTS_DISPLAY,
            max_results_analysis: defaults::DEFAULT_MAX_RESULTS_ANALYSIS,
            max_options_display: defaults::DEFAULT_MAX_OPTIONS_DISPLAY,
            undo_capacity: defaults::DEFAULT_UNDO_CAPACITY,
            response_seed: None,
        }
    }
}
