//! CandidateSet: an ordered, id-unique sequence of records.
//!
//! Records are shared immutably through `Arc`; each set owns its own
//! sequence, so cloning a set yields an independent copy of the ranking.

use std::collections::HashSet;
use std::sync::Arc;

use super::record::{Record, RecordView};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    records: Vec<Arc<Record>>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records in order, keeping the first occurrence of each id.
    pub fn from_records(records: impl IntoIterator<Item = Arc<Record>>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Record>> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Record>> {
        self.records.get(index)
    }

    /// Up to `size` records starting at `start`. Out-of-range starts yield an empty slice.
    pub fn batch(&self, start: usize, size: usize) -> &[Arc<Record>] {
        let start = start.min(self.records.len());
        let end = start.saturating_add(size).min(self.records.len());
        &self.records[start..end]
    }

    /// Keep records satisfying `pred`, preserving order.
    pub fn filter(&self, mut pred: impl FnMut(&Record) -> bool) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| pred(r))
                .cloned()
                .collect(),
        }
    }

    /// First `n` records.
    pub fn head(&self, n: usize) -> Self {
        Self {
            records: self.records.iter().take(n).cloned().collect(),
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn views(&self) -> Vec<RecordView> {
        self.records.iter().map(|r| r.view()).collect()
    }
}

impl FromIterator<Arc<Record>> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Arc<Record>>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Arc<Record>;
    type IntoIter = std::slice::Iter<'a, Arc<Record>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
