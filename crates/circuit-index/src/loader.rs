//! CSV loader for the record table.
//!
//! Expects UTF-8 text with three columns per row: id, hierarchy path,
//! display name. Structural problems are fatal; rows with a blank
//! required field are dropped as a data-cleaning step.

use std::collections::HashSet;
use std::path::Path;

use circuit_core::constants::DATASET_FIELD_COUNT;
use circuit_core::errors::DataLoadError;
use circuit_core::models::Record;
use tracing::{debug, info, warn};

/// Load all usable records from a CSV file.
pub fn load_records(path: &Path, has_headers: bool) -> Result<Vec<Record>, DataLoadError> {
    let path_display = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_path(path)
        .map_err(|e| map_csv_error(&path_display, e))?;

    if has_headers {
        let headers = reader.headers().map_err(|e| map_csv_error(&path_display, e))?;
        if headers.len() != DATASET_FIELD_COUNT {
            return Err(DataLoadError::FieldCount {
                line: 1,
                expected: DATASET_FIELD_COUNT,
                actual: headers.len(),
            });
        }
    }

    let mut records = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut dropped_blank = 0usize;
    let mut dropped_duplicate = 0usize;

    for row in reader.records() {
        let row = row.map_err(|e| map_csv_error(&path_display, e))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() != DATASET_FIELD_COUNT {
            return Err(DataLoadError::FieldCount {
                line,
                expected: DATASET_FIELD_COUNT,
                actual: row.len(),
            });
        }

        let fields: Vec<&str> = row.iter().map(str::trim).collect();
        if fields.iter().any(|f| f.is_empty()) {
            dropped_blank += 1;
            continue;
        }

        if !seen_ids.insert(fields[0].to_string()) {
            warn!(id = fields[0], line, "duplicate record id, keeping first");
            dropped_duplicate += 1;
            continue;
        }

        records.push(Record::new(fields[0], fields[1], fields[2]));
    }

    debug!(dropped_blank, dropped_duplicate, "dataset cleaning complete");
    info!(path = %path_display, records = records.len(), "dataset loaded");
    Ok(records)
}

fn map_csv_error(path: &str, err: csv::Error) -> DataLoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(io) => DataLoadError::Unreadable {
            path: path.to_string(),
            reason: io.to_string(),
        },
        csv::ErrorKind::Utf8 { pos, .. } => DataLoadError::Encoding {
            line: pos.map(|p| p.line()).unwrap_or(line),
        },
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => DataLoadError::FieldCount {
            line: pos.map(|p| p.line()).unwrap_or(line),
            expected: expected_len as usize,
            actual: len as usize,
        },
        other => DataLoadError::Malformed {
            line,
            reason: format!("{other:?}"),
        },
    }
}
