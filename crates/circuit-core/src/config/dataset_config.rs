use serde::{Deserialize, Serialize};

use super::defaults;

/// Dataset source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the UTF-8 CSV file holding the record table.
    pub path: String,
    /// Whether the first row is a header row.
    pub has_headers: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_DATASET_PATH.to_string(),
            has_headers: defaults::DEFAULT_DATASET_HAS_HEADERS,
        }
    }
}
