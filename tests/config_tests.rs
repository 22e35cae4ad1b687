//! Integration tests for YAML table configuration

use insights::prelude::*;
use std::io::Write;

const REPORTS_YAML: &str = r#"
name: reports
page_size: 2
columns:
  title: { header: Report }
  type: { header: Type }
  last_updated: { header: Last Updated, kind: date }
  size: { header: Size, export: false }
export:
  file_name: reports.csv
  escaping: quoted
"#;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(REPORTS_YAML.as_bytes()).unwrap();

    let config = TableConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.name, "reports");
    assert_eq!(config.page_size, 2);
    assert_eq!(config.kind_of("last_updated"), Some(FieldKind::Date));
    assert_eq!(config.kind_of("title"), Some(FieldKind::Text));
    assert_eq!(config.export.escaping, Escaping::Quoted);
    assert_eq!(config.export.content_type, "text/csv");
}

#[test]
fn test_parse_error_names_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"name: [unterminated\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let err = TableConfig::from_yaml_file(&path).unwrap_err();
    match err {
        ConfigError::ParseError { file, .. } => assert_eq!(file, Some(path)),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_config_drives_engine() {
    let config = TableConfig::from_yaml_str(REPORTS_YAML).unwrap();
    let mut table = TableEngine::with_config(sample_reports(), config).unwrap();

    assert_eq!(table.view().total_pages(), 3);

    table.set_sort("last_updated");
    let first = &table.view().rows[0];
    assert_eq!(first.title, "Email Marketing Performance");

    let file = table.export_file();
    assert_eq!(file.file_name, "reports.csv");
    let lines: Vec<&str> = file.body.lines().collect();
    assert_eq!(lines[0], "Report,Type,Last Updated");
    assert_eq!(lines[1], "Email Marketing Performance,Email,2025-07-30");
    assert_eq!(file.row_count(), 6);
}

#[test]
fn test_quoted_export_through_engine() {
    let mut config = TableConfig::from_yaml_str(REPORTS_YAML).unwrap();
    config.export.delimiter = " ".to_string();
    let mut table = TableEngine::with_config(sample_reports(), config).unwrap();
    table.set_search("revenue");

    let csv = table.export_csv();
    assert_eq!(
        csv,
        "Report Type \"Last Updated\"\n\"Monthly Revenue Report\" Financial 2025-08-04"
    );
}

#[test]
fn test_invalid_config_rejected_by_engine() {
    let mut config = TableConfig::from_yaml_str(REPORTS_YAML).unwrap();
    config.export.delimiter = String::new();

    let err = TableEngine::with_config(sample_reports(), config).unwrap_err();
    assert!(matches!(
        err,
        InsightsError::Config(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_quoted_multiline_value_counts_one_row() {
    let mut config = TableConfig::from_yaml_str(REPORTS_YAML).unwrap();
    config.columns.shift_remove("type");
    config.columns.shift_remove("last_updated");

    let mut reports = sample_reports();
    reports[0].title = "Monthly\nRevenue".to_string();
    let mut table = TableEngine::with_config(reports, config).unwrap();
    table.set_search("comprehensive");

    let file = table.export_file();
    assert_eq!(file.body, "Report\n\"Monthly\nRevenue\"");
    assert_eq!(file.row_count(), 1);
}
