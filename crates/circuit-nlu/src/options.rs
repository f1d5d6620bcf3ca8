//! Candidate option extraction and validation for designed questions.

use std::sync::{Arc, LazyLock};

use circuit_core::constants::PATH_SEPARATOR;
use circuit_core::models::{Field, FilterLogic, QuestionSpec, Record};
use circuit_index::contains_ignore_case;
use circuit_retrieval::normalize_selection;
use regex::Regex;
use serde::Serialize;

/// Bracketed fragments inside display names that often name a variant.
static BRACKET_FRAGMENTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"【([^】]+)】", r"\[([^\]]+)\]", r"\(([^)]+)\)"]
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
});

static WORD_RUN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\u{4e00}-\u{9fff}A-Za-z0-9]{2,}").ok());

static CJK_WORD: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\u{4e00}-\u{9fff}]{2,6}").ok());

/// Terms worth offering as options whenever they occur in a display name.
pub const COMMON_KEYWORDS: &[&str] = &[
    "仪表电路图", "针脚定义", "原理图", "接线图", "电路原理", "整车", "仪表", "发动机", "底盘", "电气",
    "ECU", "BCM", "VECU", "保险丝", "继电器", "传感器", "东风", "天龙", "三一", "徐工", "红岩",
];

/// Path segments too generic to be useful options.
const GENERIC_PATH_SEGMENTS: &[&str] = &["电路图", "整车", "资料"];

const MAX_EXTRACTED_PER_KIND: usize = 10;

const OPTIMIZED_NOTE: &str = "注意：已优化选项以确保可筛选性。";

/// Option candidates mined from a batch, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PotentialOptions {
    pub filename_keywords: Vec<String>,
    pub path_keywords: Vec<String>,
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if list.len() < MAX_EXTRACTED_PER_KIND && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Mine option candidates from bracketed fragments, common keywords and path segments.
pub fn extract_potential_options(batch: &[Arc<Record>]) -> PotentialOptions {
    let mut out = PotentialOptions::default();
    for record in batch {
        let name = &record.display_name;
        for re in BRACKET_FRAGMENTS.iter() {
            for cap in re.captures_iter(name) {
                if let Some(m) = cap.get(1) {
                    if m.as_str().chars().count() >= 2 {
                        push_unique(&mut out.filename_keywords, m.as_str());
                    }
                }
            }
        }
        for kw in COMMON_KEYWORDS {
            if name.contains(kw) {
                push_unique(&mut out.filename_keywords, kw);
            }
        }
        for segment in record.hierarchy_path.split(PATH_SEPARATOR) {
            let segment = segment.trim();
            if segment.chars().count() > 1 && !GENERIC_PATH_SEGMENTS.contains(&segment) {
                push_unique(&mut out.path_keywords, segment);
            }
        }
    }
    out
}

fn findable(batch: &[Arc<Record>], option: &str, field: Field, logic: FilterLogic) -> bool {
    batch.iter().any(|r| match logic {
        FilterLogic::Contains => contains_ignore_case(r.field(field), option),
        FilterLogic::Equals => r.field(field) == option,
    })
}

/// Clean the designed options and keep only those that can select something
/// in `batch` under the question's field.
///
/// Options that fail as a whole are salvaged by their first findable word.
/// Fewer than two survivors are topped up with CJK words from the field
/// values. At most `max_options` are kept.
pub fn validate_and_optimize(
    mut spec: QuestionSpec,
    batch: &[Arc<Record>],
    max_options: usize,
) -> QuestionSpec {
    let original_count = spec.options.len();
    let field = spec.filter_field;
    let logic = spec.filter_logic;

    let mut valid: Vec<String> = Vec::new();
    for raw in &spec.options {
        let option = normalize_selection(raw);
        if findable(batch, &option, field, logic) {
            if !valid.contains(&option) {
                valid.push(option);
            }
            continue;
        }
        if option.chars().count() <= 2 {
            continue;
        }
        let salvaged = WORD_RUN.as_ref().and_then(|re| {
            re.find_iter(&option)
                .map(|m| m.as_str())
                .find(|w| findable(batch, w, field, FilterLogic::Contains))
        });
        if let Some(word) = salvaged {
            if !valid.iter().any(|v| v == word) {
                valid.push(word.to_string());
            }
        }
    }

    if valid.len() < 2 {
        if let Some(re) = CJK_WORD.as_ref() {
            'top_up: for record in batch {
                for m in re.find_iter(record.field(field)) {
                    if !valid.iter().any(|v| v == m.as_str()) {
                        valid.push(m.as_str().to_string());
                    }
                    if valid.len() >= max_options {
                        break 'top_up;
                    }
                }
            }
        }
    }

    valid.truncate(max_options);
    if valid.len() < original_count {
        spec.analysis = if spec.analysis.is_empty() {
            OPTIMIZED_NOTE.to_string()
        } else {
            format!("{}\n\n{OPTIMIZED_NOTE}", spec.analysis)
        };
    }
    spec.options = valid;
    spec
}
