//! The ordered matching strategies of the selection cascade.

use std::fmt;
use std::sync::LazyLock;

use circuit_core::models::{CandidateSet, Field};
use circuit_index::contains_ignore_case;
use regex::Regex;

/// Runs of two or more CJK unified ideographs.
static CJK_RUN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\u{4e00}-\u{9fff}]{2,}").ok());

/// Domain terms recognized inside a selection when nothing more specific matched.
pub const CONTROLLED_VOCABULARY: &[&str] = &[
    "电路图", "原理图", "接线图", "针脚", "定义", "仪表", "发动机", "底盘", "电气", "ECU", "BCM",
    "VECU", "保险丝", "继电器",
];

/// Selections longer than this (in chars) are also tried word by word.
const PARTIAL_MATCH_MIN_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Exact,
    Contains,
    PartialKeywords,
    Vocabulary,
}

impl MatchStrategy {
    /// Cascade order. The first strategy with a non-empty result wins.
    pub const CASCADE: [MatchStrategy; 4] = [
        MatchStrategy::Exact,
        MatchStrategy::Contains,
        MatchStrategy::PartialKeywords,
        MatchStrategy::Vocabulary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatchStrategy::Exact => "exact",
            MatchStrategy::Contains => "contains",
            MatchStrategy::PartialKeywords => "partial_keywords",
            MatchStrategy::Vocabulary => "vocabulary",
        }
    }

    /// Apply this strategy to `candidates`, matching `selection` against `field`.
    pub fn apply(self, candidates: &CandidateSet, selection: &str, field: Field) -> CandidateSet {
        match self {
            MatchStrategy::Exact => candidates.filter(|r| r.field(field) == selection),
            MatchStrategy::Contains => {
                candidates.filter(|r| contains_ignore_case(r.field(field), selection))
            }
            MatchStrategy::PartialKeywords => {
                if selection.chars().count() <= PARTIAL_MATCH_MIN_CHARS {
                    return CandidateSet::new();
                }
                let words = cjk_runs(selection);
                any_term_matches(candidates, &words, field)
            }
            MatchStrategy::Vocabulary => {
                let terms: Vec<&str> = CONTROLLED_VOCABULARY
                    .iter()
                    .copied()
                    .filter(|t| selection.contains(t))
                    .collect();
                any_term_matches(candidates, &terms, field)
            }
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn cjk_runs(text: &str) -> Vec<&str> {
    match CJK_RUN.as_ref() {
        Some(re) => re.find_iter(text).map(|m| m.as_str()).collect(),
        None => Vec::new(),
    }
}

fn any_term_matches(candidates: &CandidateSet, terms: &[&str], field: Field) -> CandidateSet {
    if terms.is_empty() {
        return CandidateSet::new();
    }
    candidates.filter(|r| {
        let value = r.field(field);
        terms.iter().any(|t| contains_ignore_case(value, t))
    })
}
