//! Selection text normalization.
//!
//! Option labels often carry explanations or hedges ("完整的…（文件名称通常含…）")
//! that never appear in the data. Normalization strips them before matching.

use std::sync::LazyLock;

use regex::Regex;

/// Bracket pairs whose content is removed, applied in this order.
static BRACKETED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"（[^）]*）", r"\([^)]*\)", r"\[[^\]]*\]", r"【[^】]*】"]
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
});

/// Phrases removed wherever they occur, in this order.
pub const FILLER_PHRASES: &[&str] = &[
    "完整的",
    "特定的",
    "相关",
    "文档",
    "文件",
    "图纸",
    "通常含",
    "包含",
    "例如",
    "比如",
    "如",
    "不确定",
    "都需要看看",
];

const TRIM_PUNCTUATION: &[char] = &[
    '，', '、', '。', ',', '.', '：', ':', '；', ';', '\'', '"', '‘', '’', '“', '”',
];

/// Strip bracketed asides and filler phrases, then trim whitespace and
/// punctuation at both ends. Falls back to the original text if nothing
/// remains.
pub fn normalize_selection(text: &str) -> String {
    let mut cleaned = text.to_string();
    for re in BRACKETED.iter() {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    for phrase in FILLER_PHRASES {
        cleaned = cleaned.replace(phrase, "");
    }
    let trimmed =
        cleaned.trim_matches(|c: char| c.is_whitespace() || TRIM_PUNCTUATION.contains(&c));
    if trimmed.is_empty() {
        text.to_string()
    } else {
        trimmed.to_string()
    }
}
