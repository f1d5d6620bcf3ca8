//! Deterministic local NLU used when no model is reachable.

mod rules;

pub use rules::{jaccard_similarity, RuleBasedNlu, CIRCUIT_KEYWORDS, SIMILARITY_THRESHOLD};
