use serde::{Deserialize, Serialize};

use super::defaults;

/// NLU capability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NluConfig {
    /// Primary provider: "llm" or "rules".
    pub provider: String,
    /// Base URL of the OpenAI-compatible chat completions API.
    pub base_url: String,
    /// Model used for classification, extraction and correction.
    pub model: String,
    /// Model used for question design.
    pub reasoner_model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Sampling temperature.
    pub temperature: f64,
    /// Max cached keyword extractions.
    pub keyword_cache_size: u64,
    /// Max options kept from a designed question, before the synthetic option.
    pub max_designed_options: usize,
}

impl Default for NluConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_NLU_PROVIDER.to_string(),
            base_url: defaults::DEFAULT_LLM_BASE_URL.to_string(),
            model: defaults::DEFAULT_LLM_MODEL.to_string(),
            reasoner_model: defaults::DEFAULT_LLM_REASONER_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_LLM_API_KEY_ENV.to_string(),
            timeout_secs: defaults::DEFAULT_LLM_TIMEOUT_SECS,
            temperature: defaults::DEFAULT_LLM_TEMPERATURE,
            keyword_cache_size: defaults::DEFAULT_KEYWORD_CACHE_SIZE,
            max_designed_options: defaults::DEFAULT_MAX_DESIGNED_OPTIONS,
        }
    }
}

impl NluConfig {
    /// Read the API key from the configured environment variable.
    /// Blank values count as missing.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}
