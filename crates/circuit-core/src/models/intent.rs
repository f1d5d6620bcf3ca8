use serde::{Deserialize, Deserializer, Serialize};

/// Search-related intent of a free-text turn.
///
/// `back`, `reset` and option selection never come out of classification;
/// they have dedicated entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    NewSearch,
    ProvideClue,
    Other,
}

impl Intent {
    /// Parse a label. Anything unrecognized is `Other`.
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "new_search" => Intent::NewSearch,
            "provide_clue" => Intent::ProvideClue,
            _ => Intent::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::NewSearch => "new_search",
            Intent::ProvideClue => "provide_clue",
            Intent::Other => "other",
        }
    }
}

impl<'de> Deserialize<'de> for Intent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Intent::from_label(&s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    #[default]
    Medium,
    Low,
}

impl Confidence {
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Confidence::High,
            "low" => Confidence::Low,
            _ => Confidence::Medium,
        }
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Confidence::from_label(&s))
    }
}

/// Intent-specific payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntentExtra {
    /// Query text to search for, when the intent is a new search.
    #[serde(default)]
    pub new_query: Option<String>,
    /// Keywords narrowing the current topic, when the intent is a clue.
    #[serde(default)]
    pub clue_keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentClassification {
    pub intent: Intent,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default, alias = "additional_info")]
    pub extra: IntentExtra,
}

impl IntentClassification {
    pub fn new(intent: Intent, confidence: Confidence, reasoning: impl Into<String>) -> Self {
        Self {
            intent,
            confidence,
            reasoning: reasoning.into(),
            extra: IntentExtra::default(),
        }
    }
}

/// Session context handed to intent classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentContext {
    pub current_query: String,
    pub current_question: Option<String>,
    pub available_options: Vec<String>,
    pub previous_questions_count: usize,
}

impl IntentContext {
    pub fn has_current_question(&self) -> bool {
        self.current_question.is_some()
    }
}
