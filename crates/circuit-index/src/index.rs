//! DatasetIndex: process-wide, read-only record table.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use circuit_core::config::DatasetConfig;
use circuit_core::errors::{CircuitResult, DataLoadError};
use circuit_core::models::{CandidateSet, Field, Record};

use crate::loader;
use crate::matching::is_blank;

/// Read-only record table with field-scoped substring search.
///
/// Row order is the load order and is the canonical tie-break order for
/// every ranked result.
pub struct DatasetIndex {
    records: Vec<Arc<Record>>,
    /// Lowercased field values, indexed by row then by `Field` position.
    lowered: Vec<[String; 2]>,
    by_id: HashMap<String, usize>,
    fingerprint: String,
}

impl DatasetIndex {
    /// Build from records already in memory. Later duplicate ids are ignored.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if by_id.contains_key(&record.id) {
                continue;
            }
            by_id.insert(record.id.clone(), kept.len());
            kept.push(Arc::new(record));
        }

        let lowered = kept
            .iter()
            .map(|r| {
                [
                    r.hierarchy_path.to_lowercase(),
                    r.display_name.to_lowercase(),
                ]
            })
            .collect();
        let fingerprint = compute_fingerprint(&kept);

        Self {
            records: kept,
            lowered,
            by_id,
            fingerprint,
        }
    }

    /// Load from a CSV file. Any failure is fatal to the caller.
    pub fn load(path: impl AsRef<Path>, has_headers: bool) -> Result<Self, DataLoadError> {
        let records = loader::load_records(path.as_ref(), has_headers)?;
        Ok(Self::from_records(records))
    }

    /// Load using the dataset section of the config.
    pub fn from_config(config: &DatasetConfig) -> CircuitResult<Self> {
        Ok(Self::load(&config.path, config.has_headers)?)
    }

    /// Every record, in row order.
    pub fn all(&self) -> CandidateSet {
        CandidateSet::from_records(self.records.iter().cloned())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Record>> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// Row positions (ascending) whose `field` contains `keyword`, ignoring case.
    /// The keyword is taken literally, as in [`crate::contains_ignore_case`]. A blank
    /// keyword matches nothing.
    pub fn positions_matching(&self, field: Field, keyword: &str) -> Vec<usize> {
        if is_blank(keyword) {
            return Vec::new();
        }
        let needle = keyword.to_lowercase();
        let slot = field_slot(field);
        self.lowered
            .iter()
            .enumerate()
            .filter(|(_, values)| values[slot].contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Record at a row position.
    pub fn record_at(&self, position: usize) -> Option<&Arc<Record>> {
        self.records.get(position)
    }

    /// Records whose `field` contains `keyword`, ignoring case, in row order.
    pub fn contains_match(&self, field: Field, keyword: &str) -> CandidateSet {
        self.records_at(self.positions_matching(field, keyword))
    }

    /// Records at the given row positions, in the order given.
    pub fn records_at(&self, positions: impl IntoIterator<Item = usize>) -> CandidateSet {
        positions
            .into_iter()
            .filter_map(|i| self.records.get(i).cloned())
            .collect()
    }

    /// Hex blake3 hash over every loaded row.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn field_slot(field: Field) -> usize {
    match field {
        Field::HierarchyPath => 0,
        Field::DisplayName => 1,
    }
}

fn compute_fingerprint(records: &[Arc<Record>]) -> String {
    let mut hasher = blake3::Hasher::new();
    for r in records {
        hasher.update(r.id.as_bytes());
        hasher.update(&[0x1f]);
        hasher.update(r.hierarchy_path.as_bytes());
        hasher.update(&[0x1f]);
        hasher.update(r.display_name.as_bytes());
        hasher.update(&[0x1e]);
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DatasetIndex {
        DatasetIndex::from_records(vec![
            Record::new("A", "东风->仪表", "仪表电路图1"),
            Record::new("B", "东风->发动机", "发动机电路图"),
            Record::new("C", "三一->仪表", "仪表针脚定义"),
        ])
    }

    #[test]
    fn contains_match_is_field_scoped() {
        let index = sample();
        assert_eq!(index.contains_match(Field::HierarchyPath, "东风").ids(), vec!["A", "B"]);
        assert!(index.contains_match(Field::DisplayName, "东风").is_empty());
    }

    #[test]
    fn contains_match_ignores_case() {
        let index = DatasetIndex::from_records(vec![Record::new("X", "p", "BCM针脚")]);
        assert_eq!(index.contains_match(Field::DisplayName, "bcm").len(), 1);
    }

    #[test]
    fn blank_keyword_matches_nothing() {
        assert!(sample().positions_matching(Field::DisplayName, "  ").is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let index = DatasetIndex::from_records(vec![
            Record::new("A", "p1", "n1"),
            Record::new("A", "p2", "n2"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("A").unwrap().hierarchy_path, "p1");
    }

    #[test]
    fn fingerprint_is_stable_and_content_sensitive() {
        assert_eq!(sample().fingerprint(), sample().fingerprint());
        let other = DatasetIndex::from_records(vec![Record::new("A", "东风->仪表", "x")]);
        assert_ne!(sample().fingerprint(), other.fingerprint());
    }
}
