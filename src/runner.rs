// src/runner.rs
use std::fs;
use std::path::Path;

use crate::error::SetupError;
use crate::{logd, logf};
use crate::fill::{self, PageSpec, RunResult};
use crate::dom::{self, PageDoc};
use crate::mapping::Mapping;
use crate::params::Params;
use crate::report::ReportSink;
use crate::specs::DatasetKind;

/// Read and parse a saved page. The only two ways a run can abort:
/// unreadable snapshot, or markup with no elements at all.
pub fn load_document(path: &Path) -> Result<PageDoc, SetupError> {
    let html = fs::read_to_string(path).map_err(|source| SetupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = dom::parse_snapshot(&html)?;
    logd!("parsed {} elements from {}", doc.len(), path.display());
    Ok(doc)
}

/// A `--mapping` file overrides the built-in dataset table.
pub fn resolve_mapping(params: &Params) -> Result<Mapping, SetupError> {
    if let Some(path) = &params.mapping_file {
        let mapping = Mapping::from_json_file(path)?;
        logf!("mapping: {} entries from {}", mapping.len(), path.display());
        return Ok(mapping);
    }
    // cli guarantees one of the two is present
    let kind = params
        .dataset
        .ok_or_else(|| SetupError::UnknownDataset(s!("<none>")))?;
    let mapping = kind.mapping();
    logf!("mapping: {} entries from built-in `{}`", mapping.len(), kind.name());
    Ok(mapping)
}

/// Load the snapshot named by `params`, fill it, and report through `sink`.
pub fn run(
    params: &Params,
    mut sink: Option<&mut dyn ReportSink>,
) -> Result<RunResult, SetupError> {
    let mapping = resolve_mapping(params)?;
    let path = params
        .input
        .as_deref()
        .expect("cli guarantees an input path");
    let mut doc = load_document(path)?;

    let result = fill::fill(&mapping, &mut doc, &PageSpec::default(), sink.as_deref_mut());
    debug_assert_eq!(result.updated + result.skipped + result.failed, result.total);
    logf!(
        "run complete: updated={} skipped={} failed={} total={}",
        result.updated, result.skipped, result.failed, result.total
    );

    if let Some(s) = sink.as_deref_mut() {
        s.finish(&result);
    }
    Ok(result)
}

/// Dump a built-in table as JSON, the same shape `--mapping` accepts.
/// Counterpart of the upstream script generator: edit the dump, feed it back.
pub fn export_mapping(kind: DatasetKind, path: &Path) -> Result<(), SetupError> {
    let json = kind.mapping().to_json();
    fs::write(path, json).map_err(|source| SetupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    logf!("exported `{}` mapping to {}", kind.name(), path.display());
    Ok(())
}
