// src/error.rs
//
// Setup failures only. Per-field problems (unmapped column, missing input,
// rejected write) are tallied into the run counts and never surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("cannot read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot contains no elements")]
    EmptyDocument,

    #[error("mapping file is not valid JSON: {0}")]
    MappingParse(#[from] serde_json::Error),

    #[error("mapping must be a JSON object of string descriptions (offending key: {0})")]
    MappingShape(String),

    #[error("duplicate column name in mapping: {0}")]
    DuplicateColumn(String),

    #[error("mapping has no entries")]
    EmptyMapping,

    #[error("unknown dataset: {0} (try --list-datasets)")]
    UnknownDataset(String),
}
