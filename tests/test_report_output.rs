//! Report export and config-driven runs.

use reportcheck::config::Config;
use reportcheck::formatters::{render_text, to_json, write_report, REPORT_TITLE};
use reportcheck::grid::CellValue;
use reportcheck::{run_validation, Catalog, CheckCategory, FindingCategory};
use std::fs;
use tempfile::TempDir;

mod support;
use support::ReportBuilder;

#[test]
fn test_json_export_matches_findings() {
    let grid = ReportBuilder::complete()
        .cell(12, 9, CellValue::Number(0.0))
        .build();
    let run = run_validation(&grid, &Catalog::standard(), &CheckCategory::ALL);

    let json = to_json(&run).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(records.len(), run.findings.len());

    for (record, finding) in records.iter().zip(&run.findings) {
        let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(record["item"], finding.item.as_str());
        assert_eq!(record["severity"], finding.severity.to_string());
        assert_eq!(record["category"], finding.category.to_string());
    }
}

#[test]
fn test_text_export_of_clean_report() {
    let run = run_validation(
        &ReportBuilder::complete().build(),
        &Catalog::standard(),
        &CheckCategory::ALL,
    );
    let text = render_text(&run);
    assert!(text.starts_with("Errors: 0, Warnings: 0, Info: 0, Success: 1"));
    assert!(text.contains("[Success] (1)"));
    assert!(!text.contains("[Error]"));
}

#[test]
fn test_write_report_round_trip_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("results.json");
    let run = run_validation(
        &ReportBuilder::empty().build(),
        &Catalog::standard(),
        &CheckCategory::ALL,
    );

    write_report(&path, &run, "empty.xlsx").unwrap();
    let saved: Vec<reportcheck::Finding> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, run.findings);
}

#[test]
fn test_write_text_report_has_header() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("results.txt");
    let run = run_validation(
        &ReportBuilder::complete().build(),
        &Catalog::standard(),
        &CheckCategory::ALL,
    );

    write_report(&path, &run, "student-a.xlsx").unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(REPORT_TITLE));
    assert!(text.contains("Source: student-a.xlsx"));
    assert!(text.contains("Generated: "));
}

#[test]
fn test_config_disables_checks_and_overrides_catalog() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("reportcheck.yaml");
    fs::write(
        &path,
        r#"
checks:
  spelling: false
catalog:
  scores:
    bounds:
      subject_max: 150
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let grid = ReportBuilder::complete()
        .cell(10, 5, CellValue::Number(120.0))
        .section("宿題について", "宿題は毎回期限を守って提出できている。とゆうことで安心している。")
        .build();

    let run = run_validation(&grid, &config.catalog, &config.checks.enabled());
    assert!(run
        .findings
        .iter()
        .all(|f| f.category != FindingCategory::RangeError));
    assert!(run
        .findings
        .iter()
        .all(|f| f.category != FindingCategory::PossibleTypo));
}
