/// Dataset load errors. All of these are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("cannot read dataset {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("dataset is not valid UTF-8 at line {line}")]
    Encoding { line: u64 },

    #[error("line {line}: expected {expected} fields, found {actual}")]
    FieldCount {
        line: u64,
        expected: usize,
        actual: usize,
    },

    #[error("malformed dataset at line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}
