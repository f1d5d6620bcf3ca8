use serde::{Deserialize, Serialize};

use super::field::Field;

/// One row of the dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Unique, stable identifier.
    pub id: String,
    /// Category path, segments joined by `->`.
    pub hierarchy_path: String,
    /// Display name of the linked document.
    pub display_name: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        hierarchy_path: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            hierarchy_path: hierarchy_path.into(),
            display_name: display_name.into(),
        }
    }

    /// Value of a searchable field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::HierarchyPath => &self.hierarchy_path,
            Field::DisplayName => &self.display_name,
        }
    }

    pub fn view(&self) -> RecordView {
        RecordView::from(self)
    }
}

/// Wire shape of a record inside a `results` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    pub id: String,
    pub hierarchy_path: String,
    pub display_name: String,
}

impl From<&Record> for RecordView {
    fn from(r: &Record) -> Self {
        Self {
            id: r.id.clone(),
            hierarchy_path: r.hierarchy_path.clone(),
            display_name: r.display_name.clone(),
        }
    }
}
