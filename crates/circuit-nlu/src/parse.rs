//! Defensive parsing of model replies.
//!
//! Replies may wrap the JSON object in code fences or prose. The object is
//! cut out from the first `{` to the last `}` and required fields are
//! checked before anything is trusted.

use circuit_core::errors::NluError;
use circuit_core::models::{
    Confidence, Field, FilterLogic, Intent, IntentClassification, IntentExtra, QueryCorrection,
    QuestionSpec,
};
use serde_json::{Map, Value};

/// Extract the JSON object embedded in `content`.
pub fn extract_json_object(content: &str) -> Result<Map<String, Value>, NluError> {
    let body = strip_code_fence(content.trim());
    let start = body.find('{');
    let end = body.rfind('}');
    let slice = match (start, end) {
        (Some(s), Some(e)) if s < e => &body[s..=e],
        _ => {
            return Err(NluError::MalformedResponse {
                reason: "no JSON object in reply".to_string(),
            })
        }
    };
    match serde_json::from_str::<Value>(slice) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(NluError::MalformedResponse {
            reason: "reply is not a JSON object".to_string(),
        }),
        Err(e) => Err(NluError::MalformedResponse {
            reason: e.to_string(),
        }),
    }
}

fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    // Drop the language tag line.
    let rest = rest.split_once('\n').map_or(rest, |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn required<'a>(map: &'a Map<String, Value>, field: &str) -> Result<&'a Value, NluError> {
    map.get(field).ok_or_else(|| NluError::MissingField {
        field: field.to_string(),
    })
}

fn str_field(map: &Map<String, Value>, field: &str) -> Option<String> {
    map.get(field).and_then(Value::as_str).map(|s| s.trim().to_string())
}

/// Non-empty trimmed strings from a JSON array. Numbers are stringified.
fn string_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
    )
}

pub fn parse_keywords(content: &str) -> Result<Vec<String>, NluError> {
    let map = extract_json_object(content)?;
    string_list(required(&map, "keywords")?).ok_or_else(|| NluError::MalformedResponse {
        reason: "keywords is not an array".to_string(),
    })
}

pub fn parse_classification(content: &str) -> Result<IntentClassification, NluError> {
    let map = extract_json_object(content)?;
    let intent = required(&map, "intent")?
        .as_str()
        .map(Intent::from_label)
        .ok_or_else(|| NluError::MalformedResponse {
            reason: "intent is not a string".to_string(),
        })?;
    let confidence = str_field(&map, "confidence")
        .map(|c| Confidence::from_label(&c))
        .unwrap_or_default();
    let reasoning = str_field(&map, "reasoning").unwrap_or_default();

    let info = map
        .get("additional_info")
        .or_else(|| map.get("extra"))
        .and_then(Value::as_object);
    let extra = IntentExtra {
        new_query: info
            .and_then(|i| str_field(i, "new_query"))
            .filter(|q| !q.is_empty()),
        clue_keywords: info.and_then(|i| i.get("clue_keywords")).and_then(string_list),
    };

    Ok(IntentClassification {
        intent,
        confidence,
        reasoning,
        extra,
    })
}

pub fn parse_question(content: &str) -> Result<QuestionSpec, NluError> {
    let map = extract_json_object(content)?;
    let question = required(&map, "question")?
        .as_str()
        .map(|s| s.trim().to_string())
        .ok_or_else(|| NluError::MalformedResponse {
            reason: "question is not a string".to_string(),
        })?;
    let options = string_list(required(&map, "options")?).ok_or_else(|| {
        NluError::MalformedResponse {
            reason: "options is not an array".to_string(),
        }
    })?;

    Ok(QuestionSpec {
        analysis: str_field(&map, "analysis").unwrap_or_default(),
        question,
        options,
        filter_field: str_field(&map, "filter_field")
            .map(|f| Field::parse_or_default(&f))
            .unwrap_or_default(),
        filter_logic: str_field(&map, "filter_logic")
            .map(|l| FilterLogic::parse_or_default(&l))
            .unwrap_or_default(),
        reasoning: str_field(&map, "design_reasoning")
            .or_else(|| str_field(&map, "reasoning"))
            .unwrap_or_default(),
    })
}

pub fn parse_correction(content: &str, original: &str) -> Result<QueryCorrection, NluError> {
    let map = extract_json_object(content)?;
    let corrected = required(&map, "corrected_query")?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| NluError::MalformedResponse {
            reason: "corrected_query is empty".to_string(),
        })?;

    Ok(QueryCorrection {
        original_query: original.to_string(),
        corrected_query: corrected.to_string(),
        explanation: str_field(&map, "explanation").unwrap_or_default(),
        confidence: str_field(&map, "confidence")
            .map(|c| Confidence::from_label(&c))
            .unwrap_or_default(),
    })
}
