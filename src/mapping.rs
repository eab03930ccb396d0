// src/mapping.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SetupError;

/// One column → description entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescription {
    pub name: String,
    pub text: String,
}

/// Column-name-keyed description table. Keys are unique within a run; order
/// is irrelevant and never relied on.
#[derive(Clone, Debug, Default)]
pub struct Mapping {
    entries: BTreeMap<String, String>,
}

impl Mapping {
    /// Build from a static table (the built-in dataset specs).
    /// Built-in tables are asserted unique and non-empty by tests, so this
    /// path is infallible.
    pub fn from_table(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(k, v)| (s!(*k), s!(*v)))
            .collect::<BTreeMap<_, _>>();
        debug_assert_eq!(entries.len(), pairs.len(), "duplicate column in built-in table");
        Self { entries }
    }

    /// Build from owned pairs, rejecting duplicates and emptiness.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries = BTreeMap::new();
        for (name, text) in pairs {
            if entries.insert(name.clone(), text).is_some() {
                return Err(SetupError::DuplicateColumn(name));
            }
        }
        if entries.is_empty() {
            return Err(SetupError::EmptyMapping);
        }
        Ok(Self { entries })
    }

    /// Load a `{"column": "description", ...}` JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, SetupError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(SetupError::MappingShape(s!("<root>")));
        };
        let mut pairs = Vec::with_capacity(map.len());
        for (name, v) in map {
            let Value::String(text) = v else {
                return Err(SetupError::MappingShape(name));
            };
            pairs.push((name, text));
        }
        Self::from_pairs(pairs)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SetupError> {
        let json = fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ColumnDescription> + '_ {
        self.entries.iter().map(|(name, text)| ColumnDescription {
            name: name.clone(),
            text: text.clone(),
        })
    }

    /// Pretty JSON, the same shape `from_json_str` accepts.
    pub fn to_json(&self) -> String {
        // BTreeMap<String, String> cannot fail to serialize
        serde_json::to_string_pretty(&self.entries).unwrap_or_default()
    }
}
