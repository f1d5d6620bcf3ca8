use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Searchable record field. Serialized by its dataset column label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    HierarchyPath,
    #[default]
    DisplayName,
}

impl Field {
    /// Both searchable fields, in retrieval order.
    pub const ALL: [Field; 2] = [Field::HierarchyPath, Field::DisplayName];

    /// Column label used in the dataset and by the NLU capability.
    pub fn label(self) -> &'static str {
        match self {
            Field::HierarchyPath => "层级路径",
            Field::DisplayName => "关联文件名称",
        }
    }

    /// Parse a label or identifier. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "层级路径" | "hierarchy_path" | "hierarchyPath" | "path" => Some(Field::HierarchyPath),
            "关联文件名称" | "display_name" | "displayName" | "filename" | "name" => {
                Some(Field::DisplayName)
            }
            _ => None,
        }
    }

    /// Parse with the display-name field as fallback.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Field::parse_or_default(&s))
    }
}

/// How a question's options relate to field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterLogic {
    #[default]
    Contains,
    Equals,
}

impl FilterLogic {
    pub fn label(self) -> &'static str {
        match self {
            FilterLogic::Contains => "包含",
            FilterLogic::Equals => "等于",
        }
    }

    /// Parse a label; anything unrecognized is treated as containment.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim() {
            "等于" | "equals" | "eq" => FilterLogic::Equals,
            _ => FilterLogic::Contains,
        }
    }
}

impl fmt::Display for FilterLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for FilterLogic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for FilterLogic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FilterLogic::parse_or_default(&s))
    }
}
