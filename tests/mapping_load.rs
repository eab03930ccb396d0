// tests/mapping_load.rs

use descfill::error::SetupError;
use descfill::mapping::Mapping;
use descfill::specs::DatasetKind;

#[test]
fn json_object_loads() {
    let m = Mapping::from_json_str(r#"{"AVG": "Batting average (H / AB)", "HR": "Home runs"}"#)
        .unwrap();
    assert_eq!(m.len(), 2);
    assert_eq!(m.get("AVG"), Some("Batting average (H / AB)"));
    assert!(m.get("OBP").is_none());
}

#[test]
fn non_object_json_rejected() {
    assert!(matches!(
        Mapping::from_json_str(r#"["AVG"]"#),
        Err(SetupError::MappingShape(_))
    ));
}

#[test]
fn non_string_description_rejected() {
    let err = Mapping::from_json_str(r#"{"AVG": 42}"#).unwrap_err();
    match err {
        SetupError::MappingShape(key) => assert_eq!(key, "AVG"),
        other => panic!("expected MappingShape, got {other}"),
    }
}

#[test]
fn invalid_json_is_a_parse_error() {
    assert!(matches!(
        Mapping::from_json_str("{nope"),
        Err(SetupError::MappingParse(_))
    ));
}

#[test]
fn empty_mapping_rejected() {
    assert!(matches!(
        Mapping::from_json_str("{}"),
        Err(SetupError::EmptyMapping)
    ));
}

#[test]
fn duplicate_pairs_rejected() {
    let err = Mapping::from_pairs(vec![
        (String::from("AVG"), String::from("a")),
        (String::from("AVG"), String::from("b")),
    ])
    .unwrap_err();
    assert!(matches!(err, SetupError::DuplicateColumn(ref k) if k == "AVG"));
}

#[test]
fn export_round_trips_through_load() {
    let kind = DatasetKind::Rosters;
    let dumped = kind.mapping().to_json();
    let reloaded = Mapping::from_json_str(&dumped).unwrap();
    assert_eq!(reloaded.len(), kind.columns().len());
    assert_eq!(reloaded.get("pool"), kind.mapping().get("pool"));
}

#[test]
fn builtin_tables_are_unique_and_non_empty() {
    for kind in DatasetKind::all() {
        let table = kind.columns();
        let mapping = kind.mapping();
        assert!(!table.is_empty(), "{} table empty", kind.name());
        assert_eq!(
            mapping.len(),
            table.len(),
            "{} table has duplicate column names",
            kind.name()
        );
        for (name, text) in table {
            assert!(!name.is_empty(), "{}: empty column name", kind.name());
            assert!(!text.trim().is_empty(), "{}: {} has empty text", kind.name(), name);
        }
    }
}

#[test]
fn dataset_kind_parses_cli_names() {
    assert_eq!(DatasetKind::parse("statcast").unwrap(), DatasetKind::Statcast);
    assert_eq!(
        DatasetKind::parse("Pitcher-Arsenal").unwrap(),
        DatasetKind::PitcherArsenal
    );
    assert!(matches!(
        DatasetKind::parse("bogus"),
        Err(SetupError::UnknownDataset(_))
    ));
}

#[test]
fn known_entries_present_in_builtins() {
    assert_eq!(
        DatasetKind::BatterSummary.mapping().get("AVG"),
        Some("Batting average (H / AB)")
    );
    assert!(DatasetKind::Statcast.mapping().contains("release_speed"));
    assert!(DatasetKind::PitcherArsenal.mapping().contains("FF_usage_pct"));
}
