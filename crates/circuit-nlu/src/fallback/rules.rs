//! Keyword-vocabulary intent rules, token-based keyword splitting and a
//! generic question built from raw field values.

use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, LazyLock};

use circuit_core::errors::CircuitResult;
use circuit_core::models::{
    AnsweredQuestion, Confidence, Field, FilterLogic, Intent, IntentClassification, IntentContext,
    IntentExtra, QueryCorrection, QuestionSpec, Record,
};
use circuit_core::traits::INluProvider;
use regex::Regex;

use crate::options::extract_potential_options;

/// Terms whose presence marks a turn as circuit-search related.
pub const CIRCUIT_KEYWORDS: &[&str] = &[
    "电路图", "电路", "图纸", "接线图", "原理图", "针脚", "线路图", "东风", "三一", "徐工", "红岩",
    "解放", "重汽", "仪表", "发动机", "底盘", "电气", "ECU", "BCM", "保险丝", "继电器", "找", "需要",
    "查", "搜索", "定位",
];

/// Below this Jaccard similarity a related turn counts as a new search.
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Brand and system names that split a run of CJK text into keywords.
const SEGMENT_TERMS: &[&str] = &[
    "东风", "三一", "徐工", "红岩", "解放", "重汽", "仪表", "发动机", "底盘", "电气", "ECU", "BCM",
    "VECU", "保险丝", "继电器", "针脚",
];

/// Phrases removed before splitting, longest first.
const QUERY_STOP_PHRASES: &[&str] = &[
    "我要找", "帮我找", "请帮我", "找一下", "查一下", "电路图", "线路图", "我要", "需要", "搜索",
    "定位", "的", "找", "查", "图",
];

const DEFAULT_OPTIONS: &[&str] = &["仪表电路图", "针脚定义"];

static TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\u{4e00}-\u{9fff}A-Za-z0-9]+").ok());

fn tokens(text: &str) -> Vec<String> {
    match TOKEN.as_ref() {
        Some(re) => re.find_iter(text).map(|m| m.as_str().to_string()).collect(),
        None => Vec::new(),
    }
}

/// Jaccard similarity of the lowercase word-token sets of two texts.
/// Two texts without any tokens count as entirely different.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let a: HashSet<String> = tokens(&a.to_lowercase()).into_iter().collect();
    let b: HashSet<String> = tokens(&b.to_lowercase()).into_iter().collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

/// Split a token at every occurrence boundary of a known term.
fn segment(token: &str) -> Vec<&str> {
    let mut cuts = BTreeSet::from([0, token.len()]);
    for term in SEGMENT_TERMS {
        for (start, matched) in token.match_indices(term) {
            cuts.insert(start);
            cuts.insert(start + matched.len());
        }
    }
    let cuts: Vec<usize> = cuts.into_iter().collect();
    cuts.windows(2)
        .map(|w| &token[w[0]..w[1]])
        .filter(|s| s.chars().count() >= 2)
        .collect()
}

/// Rule-based NLU. Every operation succeeds.
#[derive(Debug, Clone)]
pub struct RuleBasedNlu {
    max_options: usize,
}

impl Default for RuleBasedNlu {
    fn default() -> Self {
        Self::new(circuit_core::config::defaults::DEFAULT_MAX_DESIGNED_OPTIONS)
    }
}

impl RuleBasedNlu {
    pub fn new(max_options: usize) -> Self {
        Self { max_options }
    }

    /// Related text with no current query, or text far from it, is a new
    /// search; related text close to the current query is a clue; anything
    /// else is `Other`.
    pub fn classify(&self, context: &IntentContext, text: &str) -> IntentClassification {
        let related = CIRCUIT_KEYWORDS.iter().any(|kw| text.contains(kw));
        if !related {
            return IntentClassification::new(Intent::Other, Confidence::High, "输入与电路图搜索无关");
        }

        let current = context.current_query.trim();
        if current.is_empty() || jaccard_similarity(current, text) < SIMILARITY_THRESHOLD {
            let mut c = IntentClassification::new(
                Intent::NewSearch,
                Confidence::Medium,
                "用户提出了新的电路图搜索需求",
            );
            c.extra = IntentExtra {
                new_query: Some(text.to_string()),
                clue_keywords: None,
            };
            c
        } else {
            let mut c = IntentClassification::new(
                Intent::ProvideClue,
                Confidence::Medium,
                "用户提供了额外的搜索线索",
            );
            c.extra = IntentExtra {
                new_query: None,
                clue_keywords: Some(vec![text.to_string()]),
            };
            c
        }
    }

    /// Split a query into keywords at stop phrases, punctuation and known terms.
    pub fn keywords(&self, query: &str) -> Vec<String> {
        let mut cleaned = query.to_string();
        for phrase in QUERY_STOP_PHRASES {
            cleaned = cleaned.replace(phrase, " ");
        }
        let mut out: Vec<String> = Vec::new();
        for token in tokens(&cleaned) {
            for piece in segment(&token) {
                if !out.iter().any(|k| k == piece) {
                    out.push(piece.to_string());
                }
            }
        }
        out
    }

    /// Generic question over mined display-name keywords, falling back to
    /// path segments and then to fixed document types. Options the user
    /// already chose are not offered again.
    pub fn question(
        &self,
        batch: &[Arc<Record>],
        previous: &[AnsweredQuestion],
    ) -> QuestionSpec {
        let potential = extract_potential_options(batch);
        let chosen: HashSet<&str> = previous.iter().map(|q| q.user_choice.as_str()).collect();
        let fresh = |list: Vec<String>| -> Vec<String> {
            list.into_iter()
                .filter(|o| !chosen.contains(o.as_str()))
                .take(self.max_options)
                .collect()
        };

        let (options, field) = match fresh(potential.filename_keywords) {
            names if !names.is_empty() => (names, Field::DisplayName),
            _ => match fresh(potential.path_keywords) {
                paths if !paths.is_empty() => (paths, Field::HierarchyPath),
                _ => (
                    DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
                    Field::DisplayName,
                ),
            },
        };

        QuestionSpec {
            analysis: format!("分析了当前 {} 个结果，发现以下特征：", batch.len()),
            question: "请选择您需要的文档类型：".to_string(),
            options,
            filter_field: field,
            filter_logic: FilterLogic::Contains,
            reasoning: "基于文件名关键词提取".to_string(),
        }
    }

    pub fn correction(&self, raw: &str) -> QueryCorrection {
        QueryCorrection::unchanged(raw, "规则模式不做修正，使用原始查询")
    }
}

impl INluProvider for RuleBasedNlu {
    fn classify_intent(
        &self,
        context: &IntentContext,
        text: &str,
    ) -> CircuitResult<IntentClassification> {
        Ok(self.classify(context, text))
    }

    fn extract_keywords(&self, query: &str) -> CircuitResult<Vec<String>> {
        Ok(self.keywords(query))
    }

    fn design_question(
        &self,
        _query: &str,
        batch: &[Arc<Record>],
        previous: &[AnsweredQuestion],
    ) -> CircuitResult<QuestionSpec> {
        Ok(self.question(batch, previous))
    }

    fn correct_query(&self, raw: &str) -> CircuitResult<QueryCorrection> {
        Ok(self.correction(raw))
    }

    fn name(&self) -> &str {
        "rules"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(query: &str) -> IntentContext {
        IntentContext {
            current_query: query.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn unrelated_text_is_other() {
        let c = RuleBasedNlu::default().classify(&ctx(""), "今天天气怎么样");
        assert_eq!(c.intent, Intent::Other);
        assert_eq!(c.confidence, Confidence::High);
    }

    #[test]
    fn related_text_without_query_is_new_search() {
        let c = RuleBasedNlu::default().classify(&ctx(""), "东风天龙仪表电路图");
        assert_eq!(c.intent, Intent::NewSearch);
        assert_eq!(c.extra.new_query.as_deref(), Some("东风天龙仪表电路图"));
    }

    #[test]
    fn similar_related_text_is_clue() {
        // Tokens {东风, 仪表} vs {东风, 仪表, bcm}: similarity 2/3.
        let c = RuleBasedNlu::default().classify(&ctx("东风 仪表"), "东风 仪表 BCM");
        assert_eq!(c.intent, Intent::ProvideClue);
        assert_eq!(c.extra.clue_keywords, Some(vec!["东风 仪表 BCM".to_string()]));
    }

    #[test]
    fn dissimilar_related_text_is_new_search() {
        let c = RuleBasedNlu::default().classify(&ctx("东风 仪表"), "徐工 针脚");
        assert_eq!(c.intent, Intent::NewSearch);
    }

    #[test]
    fn jaccard_of_empty_texts_is_zero() {
        assert_eq!(jaccard_similarity("", "！！"), 0.0);
        assert!((jaccard_similarity("a b", "a c") - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn keywords_split_at_known_terms() {
        let nlu = RuleBasedNlu::default();
        assert_eq!(nlu.keywords("东风天龙仪表电路图"), vec!["东风", "天龙", "仪表"]);
        assert_eq!(nlu.keywords("我要找徐工XE135G的针脚定义"), vec!["徐工", "XE135G", "针脚", "定义"]);
        assert!(nlu.keywords("！？").is_empty());
    }

    #[test]
    fn question_skips_previous_choices() {
        let batch: Vec<_> = [
            Record::new("1", "电路图->东风->天龙", "东风天龙仪表电路图"),
            Record::new("2", "电路图->东风->天锦", "东风天锦BCM针脚定义"),
        ]
        .into_iter()
        .map(Arc::new)
        .collect();
        let previous = vec![AnsweredQuestion {
            question: "q".into(),
            options: vec![],
            filter_field: Field::DisplayName,
            filter_logic: FilterLogic::Contains,
            user_choice: "仪表电路图".into(),
        }];
        let q = RuleBasedNlu::default().question(&batch, &previous);
        assert_eq!(q.filter_field, Field::DisplayName);
        assert!(!q.options.contains(&"仪表电路图".to_string()));
        assert!(q.options.contains(&"BCM".to_string()));
        assert_eq!(q.analysis, "分析了当前 2 个结果，发现以下特征：");
    }

    #[test]
    fn empty_batch_gets_default_options() {
        let q = RuleBasedNlu::default().question(&[], &[]);
        assert_eq!(q.options, vec!["仪表电路图", "针脚定义"]);
    }

    #[test]
    fn correction_is_identity() {
        let c = RuleBasedNlu::default().correction("小忪");
        assert!(!c.is_changed());
        assert_eq!(c.confidence, Confidence::Low);
    }
}
