//! Layered configuration: compiled defaults, overridden by a TOML file.

pub mod dataset_config;
pub mod defaults;
pub mod dialogue_config;
pub mod nlu_config;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use dataset_config::DatasetConfig;
pub use dialogue_config::DialogueConfig;
pub use nlu_config::NluConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{CircuitError, CircuitResult, ConfigError};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitConfig {
    pub dataset: DatasetConfig,
    pub dialogue: DialogueConfig,
    pub nlu: NluConfig,
    pub observability: ObservabilityConfig,
}

impl CircuitConfig {
    /// Parse a TOML document. Missing sections and keys take defaults.
    pub fn from_toml(toml_str: &str) -> CircuitResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CircuitResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Reject values the dialogue cannot work with.
    pub fn validate(&self) -> CircuitResult<()> {
        let d = &self.dialogue;
        if d.max_results_analysis == 0 {
            return Err(invalid("dialogue.max_results_analysis", "must be > 0"));
        }
        if d.max_options_display < 2 {
            return Err(invalid("dialogue.max_options_display", "must be >= 2"));
        }
        if d.undo_capacity == 0 {
            return Err(invalid("dialogue.undo_capacity", "must be > 0"));
        }
        if !matches!(self.nlu.provider.as_str(), "llm" | "rules") {
            return Err(invalid("nlu.provider", "expected \"llm\" or \"rules\""));
        }
        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> CircuitError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
