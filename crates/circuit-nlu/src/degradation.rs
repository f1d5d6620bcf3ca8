//! Fallback chain for NLU calls.
//!
//! Chain: primary provider → rule-based substitute. Every fallback is
//! logged and recorded as a degradation event. No call is retried.

use std::sync::{Arc, Mutex};

use circuit_core::config::NluConfig;
use circuit_core::models::{
    AnsweredQuestion, DegradationEvent, IntentClassification, IntentContext, QueryCorrection,
    QuestionSpec, Record,
};
use circuit_core::traits::INluProvider;
use circuit_observability::nlu_span;
use tracing::{info, warn};

use crate::fallback::RuleBasedNlu;
use crate::llm_provider::LlmNluProvider;

/// Degradation events kept before the oldest are dropped.
const MAX_PENDING_EVENTS: usize = 256;

const CORRECTION_FAILED: &str = "修正失败，使用原始查询";

const NO_OPTIONS: &str = "designed question has no options";

/// Infallible NLU facade shared by every session.
pub struct NluChain {
    primary: Option<Box<dyn INluProvider>>,
    rules: RuleBasedNlu,
    events: Mutex<Vec<DegradationEvent>>,
}

impl NluChain {
    /// Chain with a primary provider in front of the rules.
    pub fn new(primary: Box<dyn INluProvider>, rules: RuleBasedNlu) -> Self {
        Self {
            primary: Some(primary),
            rules,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Rules only. Nothing ever degrades.
    pub fn rules_only(rules: RuleBasedNlu) -> Self {
        Self {
            primary: None,
            rules,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Build from config. An `llm` provider without a usable API key
    /// degrades to rules only, with a warning.
    pub fn from_config(config: &NluConfig) -> Self {
        let rules = RuleBasedNlu::new(config.max_designed_options);
        if config.provider != "llm" {
            info!(provider = %config.provider, "using rule-based NLU");
            return Self::rules_only(rules);
        }
        match LlmNluProvider::from_config(config) {
            Ok(provider) => {
                info!(model = %config.model, base_url = %config.base_url, "using LLM NLU");
                Self::new(Box::new(provider), rules)
            }
            Err(e) => {
                warn!(error = %e, "LLM NLU unavailable, falling back to rules only");
                Self::rules_only(rules)
            }
        }
    }

    /// Name of the provider tried first.
    pub fn active_provider_name(&self) -> &str {
        match &self.primary {
            Some(p) => p.name(),
            None => self.rules.name(),
        }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    fn record(&self, operation: &str, provider: &str, error: &dyn std::fmt::Display, fallback: &str) {
        warn!(operation, provider, error = %error, fallback, "NLU call failed, using fallback");
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        if events.len() >= MAX_PENDING_EVENTS {
            events.remove(0);
        }
        events.push(DegradationEvent::now(
            format!("nlu.{operation}"),
            format!("{provider}: {error}"),
            fallback,
        ));
    }

    pub fn classify_intent(&self, context: &IntentContext, text: &str) -> IntentClassification {
        let _span = nlu_span!("classify_intent", self.active_provider_name()).entered();
        if let Some(primary) = &self.primary {
            match primary.classify_intent(context, text) {
                Ok(c) => return c,
                Err(e) => self.record("classify_intent", primary.name(), &e, "rules"),
            }
        }
        self.rules.classify(context, text)
    }

    /// Keywords for a query. A failed primary yields an empty list rather
    /// than a guess.
    pub fn extract_keywords(&self, query: &str) -> Vec<String> {
        let _span = nlu_span!("extract_keywords", self.active_provider_name()).entered();
        match &self.primary {
            Some(primary) => match primary.extract_keywords(query) {
                Ok(k) => k,
                Err(e) => {
                    self.record("extract_keywords", primary.name(), &e, "empty");
                    Vec::new()
                }
            },
            None => self.rules.keywords(query),
        }
    }

    /// A question for `batch`. A primary reply without options counts as a
    /// failure, so the result always carries at least one option.
    pub fn design_question(
        &self,
        query: &str,
        batch: &[Arc<Record>],
        previous: &[AnsweredQuestion],
    ) -> QuestionSpec {
        let _span = nlu_span!("design_question", self.active_provider_name()).entered();
        if let Some(primary) = &self.primary {
            match primary.design_question(query, batch, previous) {
                Ok(q) if !q.options.is_empty() => return q,
                Ok(_) => self.record("design_question", primary.name(), &NO_OPTIONS, "rules"),
                Err(e) => self.record("design_question", primary.name(), &e, "rules"),
            }
        }
        self.rules.question(batch, previous)
    }

    pub fn correct_query(&self, raw: &str) -> QueryCorrection {
        let _span = nlu_span!("correct_query", self.active_provider_name()).entered();
        match &self.primary {
            Some(primary) => match primary.correct_query(raw) {
                Ok(c) => c,
                Err(e) => {
                    self.record("correct_query", primary.name(), &e, "original");
                    QueryCorrection::unchanged(raw, CORRECTION_FAILED)
                }
            },
            None => self.rules.correction(raw),
        }
    }

    /// Take every recorded degradation event.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *events)
    }
}
