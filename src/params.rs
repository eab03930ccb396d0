// src/params.rs
use std::path::PathBuf;

use crate::specs::DatasetKind;

/// Attribute that tags a candidate element with its column name.
pub const CANDIDATE_ATTR: &str = "title";
/// Container kind the matching input lives under.
pub const CONTAINER_TAG: &str = "th";
/// Placeholder marking the description input inside the container.
pub const INPUT_PLACEHOLDER: &str = "Please enter a description";

pub const DEBUG_LOG_FILE: &str = ".descfill/debug.log";

#[derive(Clone)]
pub struct Params {
    pub dataset: Option<DatasetKind>,   // built-in mapping table
    pub input: Option<PathBuf>,         // saved page snapshot (HTML)
    pub mapping_file: Option<PathBuf>,  // JSON mapping override
    pub export: Option<PathBuf>,        // dump selected table as JSON, then exit
    pub list_datasets: bool,            // list built-in datasets, then exit
    pub quiet: bool,                    // summary only, no per-field lines
}

impl Params {
    pub fn new() -> Self {
        Self {
            dataset: None,
            input: None,
            mapping_file: None,
            export: None,
            list_datasets: false,
            quiet: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
