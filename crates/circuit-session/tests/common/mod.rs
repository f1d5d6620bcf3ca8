//! Shared helpers for dialogue tests: a scripted NLU provider and engine builders.

#![allow(dead_code)]

use std::sync::Arc;

use circuit_core::config::DialogueConfig;
use circuit_core::errors::{CircuitResult, NluError};
use circuit_core::models::{
    AnsweredQuestion, Confidence, Field, FilterLogic, Intent, IntentClassification, IntentContext,
    QueryCorrection, QuestionSpec, Record,
};
use circuit_core::traits::INluProvider;
use circuit_index::DatasetIndex;
use circuit_nlu::{NluChain, RuleBasedNlu};
use circuit_session::{DialogueEngine, FixedPicker};

/// Deterministic provider.
///
/// - `你好` classifies as other.
/// - `+xxx` is a clue with keyword `xxx`.
/// - `?xxx` is a new search for `xxx`.
/// - anything else is a new search for the text itself.
///
/// Keywords are whitespace-separated tokens. Questions offer the distinct
/// last path segments of the batch.
#[derive(Default)]
pub struct ScriptedNlu {
    pub empty_questions: bool,
}

impl INluProvider for ScriptedNlu {
    fn classify_intent(
        &self,
        _context: &IntentContext,
        text: &str,
    ) -> CircuitResult<IntentClassification> {
        if text == "你好" {
            return Ok(IntentClassification::new(Intent::Other, Confidence::High, "greeting"));
        }
        if let Some(clue) = text.strip_prefix('+') {
            let mut c = IntentClassification::new(Intent::ProvideClue, Confidence::High, "clue");
            c.extra.clue_keywords = Some(vec![clue.to_string()]);
            return Ok(c);
        }
        let mut c = IntentClassification::new(Intent::NewSearch, Confidence::High, "search");
        if let Some(query) = text.strip_prefix('?') {
            c.extra.new_query = Some(query.to_string());
        }
        Ok(c)
    }

    fn extract_keywords(&self, query: &str) -> CircuitResult<Vec<String>> {
        Ok(query.split_whitespace().map(str::to_string).collect())
    }

    fn design_question(
        &self,
        _query: &str,
        batch: &[Arc<Record>],
        _previous: &[AnsweredQuestion],
    ) -> CircuitResult<QuestionSpec> {
        let mut options: Vec<String> = Vec::new();
        if !self.empty_questions {
            for record in batch {
                let last = record
                    .hierarchy_path
                    .rsplit("->")
                    .next()
                    .unwrap_or_default()
                    .to_string();
                if !options.contains(&last) {
                    options.push(last);
                }
            }
        }
        Ok(QuestionSpec {
            analysis: format!("分析了 {} 个结果", batch.len()),
            question: "请选择批次：".to_string(),
            options,
            filter_field: Field::HierarchyPath,
            filter_logic: FilterLogic::Contains,
            reasoning: String::new(),
        })
    }

    fn correct_query(&self, raw: &str) -> CircuitResult<QueryCorrection> {
        Ok(QueryCorrection {
            original_query: raw.to_string(),
            corrected_query: raw.replace("天笼", "天龙"),
            explanation: "typo".to_string(),
            confidence: Confidence::High,
        })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Provider whose every call fails.
pub struct FailingNlu;

impl INluProvider for FailingNlu {
    fn classify_intent(&self, _: &IntentContext, _: &str) -> CircuitResult<IntentClassification> {
        Err(transport())
    }

    fn extract_keywords(&self, _: &str) -> CircuitResult<Vec<String>> {
        Err(transport())
    }

    fn design_question(
        &self,
        _: &str,
        _: &[Arc<Record>],
        _: &[AnsweredQuestion],
    ) -> CircuitResult<QuestionSpec> {
        Err(transport())
    }

    fn correct_query(&self, _: &str) -> CircuitResult<QueryCorrection> {
        Err(transport())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn transport() -> circuit_core::CircuitError {
    NluError::Transport {
        reason: "connection refused".to_string(),
    }
    .into()
}

pub fn config() -> DialogueConfig {
    DialogueConfig {
        response_seed: Some(7),
        ..DialogueConfig::default()
    }
}

pub fn engine_with(records: Vec<Record>, provider: Box<dyn INluProvider>) -> DialogueEngine {
    let index = Arc::new(DatasetIndex::from_records(records));
    let nlu = Arc::new(NluChain::new(provider, RuleBasedNlu::default()));
    DialogueEngine::new(index, nlu, config(), 100).with_picker(FixedPicker(1))
}

pub fn scripted_engine(records: Vec<Record>) -> DialogueEngine {
    engine_with(records, Box::new(ScriptedNlu::default()))
}

pub fn rules_engine(records: Vec<Record>) -> DialogueEngine {
    let index = Arc::new(DatasetIndex::from_records(records));
    let nlu = Arc::new(NluChain::rules_only(RuleBasedNlu::default()));
    DialogueEngine::new(index, nlu, config(), 100).with_picker(FixedPicker(0))
}
