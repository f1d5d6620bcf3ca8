//! Literal, case-insensitive substring matching shared by every search path.

/// Whether `needle` occurs in `haystack`, ignoring case.
///
/// The needle is taken literally, surrounding whitespace included. A blank
/// needle never matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if is_blank(needle) {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a keyword carries nothing to search for.
pub fn is_blank(keyword: &str) -> bool {
    keyword.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_across_case() {
        assert!(contains_ignore_case("徐工 XE135G 电路图", "xe135g"));
        assert!(contains_ignore_case("bcm针脚定义", "BCM"));
    }

    #[test]
    fn needle_is_literal() {
        assert!(!contains_ignore_case("ECU", "E.U"));
        assert!(contains_ignore_case("C++ 模块", "c++"));
    }

    #[test]
    fn empty_needle_never_matches() {
        assert!(!contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("has spaces", "  "));
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_needle() {
        assert!(contains_ignore_case("y 仪表", " 仪表"));
        assert!(!contains_ignore_case("仪表", " 仪表"));
    }
}
