//! LLM-backed NLU provider over an OpenAI-compatible chat API.

use std::sync::Arc;

use circuit_core::config::NluConfig;
use circuit_core::errors::{CircuitResult, NluError};
use circuit_core::models::{
    AnsweredQuestion, IntentClassification, IntentContext, QueryCorrection, QuestionSpec, Record,
};
use circuit_core::traits::INluProvider;
use tracing::{debug, info};

use crate::cache::KeywordCache;
use crate::client::{ChatCompletion, ChatMessage, ChatRequest, HttpChatClient};
use crate::{options, parse, prompts};

const KEYWORD_MAX_TOKENS: u32 = 500;
const INTENT_MAX_TOKENS: u32 = 800;
const CORRECTION_MAX_TOKENS: u32 = 800;
const QUESTION_MAX_TOKENS: u32 = 1500;

/// NLU provider that delegates every call to a chat model.
///
/// Question design runs on the reasoner model; everything else on the chat model.
pub struct LlmNluProvider<C: ChatCompletion> {
    client: C,
    model: String,
    reasoner_model: String,
    temperature: f64,
    max_designed_options: usize,
    keyword_cache: KeywordCache,
}

impl LlmNluProvider<HttpChatClient> {
    /// Build an HTTP-backed provider. Fails if no API key is configured.
    pub fn from_config(config: &NluConfig) -> Result<Self, NluError> {
        let api_key = config.api_key().ok_or_else(|| NluError::Unavailable {
            provider: format!("llm (env {} not set)", config.api_key_env),
        })?;
        let client = HttpChatClient::new(&config.base_url, api_key, config.timeout_secs)?;
        Ok(Self::new(client, config))
    }
}

impl<C: ChatCompletion> LlmNluProvider<C> {
    pub fn new(client: C, config: &NluConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            reasoner_model: config.reasoner_model.clone(),
            temperature: config.temperature,
            max_designed_options: config.max_designed_options,
            keyword_cache: KeywordCache::new(config.keyword_cache_size),
        }
    }

    fn ask(&self, model: &str, system: &str, prompt: String, max_tokens: u32) -> Result<String, NluError> {
        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            temperature: self.temperature,
            max_tokens,
        };
        self.client.complete(&request)
    }

    pub fn keyword_cache(&self) -> &KeywordCache {
        &self.keyword_cache
    }
}

impl<C: ChatCompletion> INluProvider for LlmNluProvider<C> {
    fn classify_intent(
        &self,
        context: &IntentContext,
        text: &str,
    ) -> CircuitResult<IntentClassification> {
        let reply = self.ask(
            &self.model,
            prompts::INTENT_SYSTEM,
            prompts::intent_prompt(context, text),
            INTENT_MAX_TOKENS,
        )?;
        let classification = parse::parse_classification(&reply)?;
        debug!(intent = classification.intent.as_str(), confidence = ?classification.confidence, "intent classified");
        Ok(classification)
    }

    fn extract_keywords(&self, query: &str) -> CircuitResult<Vec<String>> {
        if let Some(hit) = self.keyword_cache.get(query) {
            debug!(query, "keyword cache hit");
            return Ok(hit);
        }
        let reply = self.ask(
            &self.model,
            prompts::KEYWORD_SYSTEM,
            prompts::keyword_prompt(query),
            KEYWORD_MAX_TOKENS,
        )?;
        let keywords = parse::parse_keywords(&reply)?;
        info!(query, ?keywords, "keywords extracted");
        self.keyword_cache.insert(query, keywords.clone());
        Ok(keywords)
    }

    fn design_question(
        &self,
        query: &str,
        batch: &[Arc<Record>],
        previous: &[AnsweredQuestion],
    ) -> CircuitResult<QuestionSpec> {
        let potential = options::extract_potential_options(batch);
        let reply = self.ask(
            &self.reasoner_model,
            prompts::QUESTION_SYSTEM,
            prompts::question_prompt(query, batch, previous, &potential),
            QUESTION_MAX_TOKENS,
        )?;
        let spec = parse::parse_question(&reply)?;
        let designed = spec.options.len();
        let spec = options::validate_and_optimize(spec, batch, self.max_designed_options);
        debug!(designed, kept = spec.options.len(), field = %spec.filter_field, "question designed");
        Ok(spec)
    }

    fn correct_query(&self, raw: &str) -> CircuitResult<QueryCorrection> {
        let reply = self.ask(
            &self.model,
            prompts::CORRECTION_SYSTEM,
            prompts::correction_prompt(raw),
            CORRECTION_MAX_TOKENS,
        )?;
        Ok(parse::parse_correction(&reply, raw)?)
    }

    fn name(&self) -> &str {
        "llm"
    }
}
