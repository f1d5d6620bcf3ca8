//! Clue narrowing over the latest search baseline.

use circuit_core::models::{CandidateSet, Field};
use circuit_index::contains_ignore_case;

/// Keep records where every non-blank clue keyword occurs in the path or the name.
///
/// Blank keywords are ignored. With no usable keywords the baseline is returned whole.
pub fn apply_clues(baseline: &CandidateSet, clue_keywords: &[String]) -> CandidateSet {
    let clues: Vec<&str> = clue_keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    baseline.filter(|r| {
        clues.iter().all(|clue| {
            Field::ALL
                .iter()
                .any(|&f| contains_ignore_case(r.field(f), clue))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_core::models::Record;
    use std::sync::Arc;

    fn baseline() -> CandidateSet {
        CandidateSet::from_records(
            [
                Record::new("A", "东风->天龙->仪表", "天龙仪表电路图"),
                Record::new("B", "东风->天锦->仪表", "天锦仪表电路图"),
                Record::new("C", "东风->天龙->底盘", "底盘针脚定义"),
            ]
            .map(Arc::new),
        )
    }

    #[test]
    fn every_clue_must_match_some_field() {
        let got = apply_clues(&baseline(), &["天龙".into(), "仪表".into()]);
        assert_eq!(got.ids(), vec!["A"]);
    }

    #[test]
    fn blank_clues_are_ignored() {
        let got = apply_clues(&baseline(), &["  ".into(), "针脚".into()]);
        assert_eq!(got.ids(), vec!["C"]);
        assert_eq!(apply_clues(&baseline(), &[]).len(), 3);
    }
}
