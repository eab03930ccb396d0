// tests/runner_setup.rs
//
// Setup failures abort; anything after setup always completes with counts.

use std::fs;
use std::path::PathBuf;

use descfill::error::SetupError;
use descfill::params::Params;
use descfill::runner;
use descfill::specs::DatasetKind;

fn temp_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("descfill_{}_{}", std::process::id(), name));
    p
}

#[test]
fn missing_snapshot_is_a_setup_error() {
    let mut params = Params::new();
    params.dataset = Some(DatasetKind::BatterSummary);
    params.input = Some(temp_path("does_not_exist.html"));

    let err = runner::run(&params, None).unwrap_err();
    assert!(matches!(err, SetupError::Io { .. }));
}

#[test]
fn elementless_snapshot_is_a_setup_error() {
    let path = temp_path("empty.html");
    fs::write(&path, "nothing but text").unwrap();

    let mut params = Params::new();
    params.dataset = Some(DatasetKind::BatterSummary);
    params.input = Some(path.clone());

    let err = runner::run(&params, None).unwrap_err();
    assert!(matches!(err, SetupError::EmptyDocument));
    fs::remove_file(path).ok();
}

#[test]
fn builtin_dataset_run_over_snapshot() {
    let path = temp_path("page.html");
    fs::write(
        &path,
        r#"<table><tr>
             <th><span title="AVG">AVG</span>
                 <input placeholder="Please enter a description"></th>
             <th><span title="not_a_column">?</span>
                 <input placeholder="Please enter a description"></th>
           </tr></table>"#,
    )
    .unwrap();

    let mut params = Params::new();
    params.dataset = Some(DatasetKind::BatterSummary);
    params.input = Some(path.clone());

    let result = runner::run(&params, None).unwrap();
    assert_eq!(result.updated, 1);
    assert_eq!(result.skipped, 1);
    assert_eq!(result.failed, 0);
    assert_eq!(result.total, 2);
    fs::remove_file(path).ok();
}

#[test]
fn mapping_file_overrides_builtin() {
    let page = temp_path("override_page.html");
    fs::write(
        &page,
        r#"<th><span title="my_col">c</span>
           <input placeholder="Please enter a description"></th>"#,
    )
    .unwrap();
    let mapping = temp_path("override.json");
    fs::write(&mapping, r#"{"my_col": "custom description"}"#).unwrap();

    let mut params = Params::new();
    params.dataset = Some(DatasetKind::Statcast); // ignored when --mapping given
    params.input = Some(page.clone());
    params.mapping_file = Some(mapping.clone());

    let result = runner::run(&params, None).unwrap();
    assert_eq!(result.updated, 1);
    fs::remove_file(page).ok();
    fs::remove_file(mapping).ok();
}

#[test]
fn export_writes_loadable_json() {
    let out = temp_path("rosters.json");
    runner::export_mapping(DatasetKind::Rosters, &out).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    let reloaded = descfill::mapping::Mapping::from_json_str(&text).unwrap();
    assert_eq!(reloaded.len(), DatasetKind::Rosters.columns().len());
    fs::remove_file(out).ok();
}
