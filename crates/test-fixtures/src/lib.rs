//! Test fixture loader for circuit search datasets and scenarios.
//!
//! Provides paths to the fixture CSV files and in-memory record sets
//! for tests across crates.

use std::path::PathBuf;

use circuit_core::models::Record;
use serde::de::DeserializeOwned;

/// Directory holding the fixture data files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Absolute path to a fixture dataset file.
pub fn dataset_path(name: &str) -> PathBuf {
    fixtures_root().join(name)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The three-record scenario dataset:
/// `A 东风/仪表 仪表电路图1`, `B 东风/发动机 发动机电路图`, `C 三一/仪表 仪表针脚定义`.
pub fn scenario_records() -> Vec<Record> {
    vec![
        Record::new("A", "东风/仪表", "仪表电路图1"),
        Record::new("B", "东风/发动机", "发动机电路图"),
        Record::new("C", "三一/仪表", "仪表针脚定义"),
    ]
}

/// `n` records that all match the keyword `东风` in the hierarchy path.
/// Display names are `东风文档{i}`, ids are `R{i:03}`.
pub fn bulk_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            Record::new(
                format!("R{i:03}"),
                format!("电路图->东风->批次{}", i / 10),
                format!("东风文档{i}"),
            )
        })
        .collect()
}

/// Parse the fixture CSV into records without going through the index.
///
/// # Panics
/// Panics on unreadable files or rows without three fields.
pub fn dataset_records(name: &str) -> Vec<Record> {
    let path = dataset_path(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read dataset {}: {}", path.display(), e));
    content
        .lines()
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let parts: Vec<&str> = line.splitn(3, ',').collect();
            assert_eq!(parts.len(), 3, "bad fixture row: {line}");
            Record::new(parts[0], parts[1], parts[2])
        })
        .collect()
}
