//! FILENAME: tests/test_import_export.rs
//! Integration tests for spreadsheet import and the RAB export.

mod common;

use chrono::NaiveDate;
use common::{Fx, TestHarness};
use tiang_app::{commands, files};
use tiang_engine::Category;
use tiang_persistence::{read_rows, SavedCellValue};

const POLE_HEADERS: &[&str] = &["Latitude", "Longitude", "Label", "Sudut (derajat)", "Kategori"];

fn pole_fixture(harness: &TestHarness) -> String {
    harness
        .write_xlsx(
            "tiang.xlsx",
            POLE_HEADERS,
            &[
                vec![Fx::T("-6.2000"), Fx::T("106.8000"), Fx::T("T-01"), Fx::N(3.0), Fx::T("TM1")],
                vec![Fx::T("-6.2010"), Fx::T("106.8010"), Fx::T("T-02"), Fx::N(30.0), Fx::T("TM2")],
                vec![Fx::T("-6.2020"), Fx::T("106.8020"), Fx::T(""), Fx::N(60.0), Fx::T("")],
                vec![Fx::T("-6.2030"), Fx::T("106.8030"), Fx::T("T-04"), Fx::N(2.0), Fx::T("TM4")],
            ],
        )
        .display()
        .to_string()
}

// ============================================================================
// POLE IMPORT
// ============================================================================

#[test]
fn test_pole_import_replaces_manual_poles() {
    let harness = TestHarness::with_angles(&["5", "5", "5", "5", "5", "5"]);
    let path = pole_fixture(&harness);

    let summary = files::import_poles_file(&harness.state, &path).unwrap();
    assert_eq!(summary.count, 4);
    assert_eq!(summary.file, "tiang.xlsx");

    let poles = harness.poles();
    assert_eq!(poles.len(), 4);
    assert_eq!(
        harness.categories(),
        vec![Category::TM1, Category::TM2, Category::TM10, Category::TM4]
    );
    assert_eq!(poles[0].label, "T-01");
    assert_eq!(poles[2].label, "Tiang 3");
    assert_eq!(poles[1].latitude.as_deref(), Some("-6.2010"));
    assert_eq!(poles[3].original_category.as_deref(), Some("TM4"));
    assert_eq!(poles[3].source, "File Import");
}

#[test]
fn test_pole_import_from_csv_with_short_header() {
    let harness = TestHarness::new();
    let path = harness.write_csv("tiang.csv", "Label,SUDUT\nA,10\nB,abc\nC,47\n");

    files::import_poles_file(&harness.state, &path.display().to_string()).unwrap();
    let angles: Vec<f64> = harness.poles().iter().map(|p| p.angle_degrees).collect();
    assert_eq!(angles, vec![10.0, 0.0, 47.0]);
    assert_eq!(harness.poles()[1].classified, Category::TM1);
}

#[test]
fn test_pole_import_from_semicolon_csv() {
    let harness = TestHarness::new();
    let path = harness.write_csv(
        "tiang_id.csv",
        "Latitude;Longitude;Label;Sudut (derajat);Kategori\n\
         -6,1;106,8;A1;20;TM2\n\
         -6,2;106,9;A2;50;TM10\n\
         -6,3;107,0;A3;30;TM2\n",
    );

    let summary = files::import_poles_file(&harness.state, &path.display().to_string()).unwrap();
    assert_eq!(summary.count, 3);

    let poles = harness.poles();
    let labels: Vec<&str> = poles.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["A1", "A2", "A3"]);
    let classes: Vec<Category> = poles.iter().map(|p| p.classified).collect();
    assert_eq!(classes, vec![Category::TM2, Category::TM10, Category::TM2]);
    assert_eq!(poles[0].latitude.as_deref(), Some("-6,1"));
}

#[test]
fn test_csv_label_reading_nan_is_kept() {
    let harness = TestHarness::new();
    let path = harness.write_csv("tiang.csv", "Label,Sudut\nNaN,10\ninf,20\n");

    files::import_poles_file(&harness.state, &path.display().to_string()).unwrap();
    let labels: Vec<String> = harness.poles().into_iter().map(|p| p.label).collect();
    assert_eq!(labels, vec!["NaN", "inf"]);
}

#[test]
fn test_unsupported_file_is_rejected_without_change() {
    let harness = TestHarness::with_angles(&["5", "20"]);
    let path = harness.write_csv("tiang.txt", "Label,Sudut\nA,10\n");

    let err = files::import_poles_file(&harness.state, &path.display().to_string()).unwrap_err();
    assert!(err.contains("Unsupported"));
    assert_eq!(harness.poles().len(), 2);
}

#[test]
fn test_manual_add_after_import_appends() {
    let harness = TestHarness::new();
    let path = pole_fixture(&harness);
    files::import_poles_file(&harness.state, &path).unwrap();

    commands::add_pole(&harness.state, "20").unwrap();
    let categories = harness.categories();
    assert_eq!(categories.len(), 5);
    // Former last pole falls back to its angle class
    assert_eq!(categories[3], Category::TM1);
    assert_eq!(categories[4], Category::TM4);
}

#[test]
fn test_angles_from_coordinates() {
    let harness = TestHarness::new();
    let path = harness.write_xlsx(
        "lurus.xlsx",
        POLE_HEADERS,
        &[
            vec![Fx::N(0.001), Fx::N(0.001), Fx::T("A"), Fx::N(0.0)],
            vec![Fx::N(0.001), Fx::N(0.002), Fx::T("B"), Fx::N(80.0)],
            vec![Fx::N(0.002), Fx::N(0.002), Fx::T("C"), Fx::N(0.0)],
        ],
    );
    files::import_poles_file(&harness.state, &path.display().to_string()).unwrap();
    assert_eq!(harness.poles()[1].classified, Category::TM10);

    // East then north: a right-angle turn at B
    assert_eq!(commands::derive_angles_from_coordinates(&harness.state).unwrap(), 1);
    let poles = harness.poles();
    let middle = &poles[1];
    assert!((middle.angle_degrees - 90.0).abs() < 0.1);
    assert_eq!(middle.classified, Category::TM10);
}

// ============================================================================
// PRICE IMPORT
// ============================================================================

#[test]
fn test_price_import_merges_named_categories() {
    let harness = TestHarness::with_angles(&["20", "20", "20"]);
    let path = harness.write_xlsx(
        "harga.xlsx",
        &["NO", "URAIAN", "MATERIAL", "PASANG"],
        &[
            vec![Fx::N(1.0), Fx::T("Konstruksi TM2 sudut"), Fx::N(9_000_000.0), Fx::N(900_000.0)],
            vec![Fx::N(2.0), Fx::T("Kabel twisted"), Fx::N(100.0), Fx::N(10.0)],
        ],
    );

    let summary = files::import_prices_file(&harness.state, &path.display().to_string()).unwrap();
    assert_eq!(summary.count, 1);
    assert_eq!(summary.skipped_rows, 1);

    let config = commands::get_config(&harness.state).unwrap();
    assert_eq!(config.prices[&Category::TM2].material, Some(9_000_000.0));
    assert_eq!(config.prices[&Category::TM2].equipment, Some(900_000.0));
    // Untouched categories keep defaults
    assert_eq!(config.prices[&Category::TM4].material, Some(8_000_000.0));

    let row = harness.summary().rows[&Category::TM2];
    assert_eq!(row.count, 1);
    assert_eq!(row.total, 10_800_000.0);
}

#[test]
fn test_price_import_from_semicolon_csv() {
    let harness = TestHarness::with_angles(&["20", "20", "20"]);
    let path = harness.write_csv(
        "harga_id.csv",
        "NO;URAIAN;MATERIAL;PASANG\n1;Konstruksi TM2 sudut;9000000;900000\n2;Kabel twisted;100;10\n",
    );

    let summary = files::import_prices_file(&harness.state, &path.display().to_string()).unwrap();
    assert_eq!(summary.count, 1);
    assert_eq!(summary.skipped_rows, 1);
    assert_eq!(harness.summary().rows[&Category::TM2].total, 10_800_000.0);
}

#[test]
fn test_report_names_imported_files() {
    let harness = TestHarness::new();
    let poles = pole_fixture(&harness);
    let prices = harness.write_csv("harga.csv", "URAIAN,MATERIAL,PASANG\nTM4,1000,100\n");
    files::import_poles_file(&harness.state, &poles).unwrap();
    files::import_prices_file(&harness.state, &prices.display().to_string()).unwrap();

    let report = commands::get_report(&harness.state).unwrap();
    assert_eq!(report.poles_file.as_deref(), Some("tiang.xlsx"));
    assert_eq!(report.prices_file.as_deref(), Some("harga.csv"));
    let text = tiang_app::report::render_text(&report);
    assert!(text.contains("File tiang: tiang.xlsx"));
    assert!(text.contains("File harga: harga.csv"));
}

#[test]
fn test_price_import_without_categories_fails() {
    let harness = TestHarness::new();
    let path = harness.write_csv("harga.csv", "URAIAN,MATERIAL\nKabel,100\n");

    let err = files::import_prices_file(&harness.state, &path.display().to_string()).unwrap_err();
    assert!(err.contains("URAIAN"));
    assert_eq!(commands::get_config(&harness.state).unwrap().prices[&Category::TM1].material, Some(5_000_000.0));
}

// ============================================================================
// EXPORT
// ============================================================================

#[test]
fn test_export_to_directory_uses_dated_name() {
    let harness = TestHarness::with_angles(&["5", "20", "10"]);
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

    let written = files::export_rab(&harness.state, &harness.dir.path().display().to_string(), date).unwrap();
    assert!(written.ends_with("RAB_Tiang_Listrik_2024-03-09.xlsx"));

    // First sheet is the pole list
    let rows = read_rows(std::path::Path::new(&written)).unwrap();
    assert_eq!(rows.len(), 3);
    let finals: Vec<String> = rows
        .iter()
        .map(|row| {
            row.iter()
                .find(|(h, _)| *h == "Kategori_Final")
                .map(|(_, v)| v.as_text())
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(finals, vec!["TM1", "TM2", "TM4"]);
}

#[test]
fn test_export_round_trips_through_pole_import() {
    let source = TestHarness::new();
    let path = pole_fixture(&source);
    files::import_poles_file(&source.state, &path).unwrap();

    let target = source.path("rab.xlsx").display().to_string();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    files::export_rab(&source.state, &target, date).unwrap();

    let reimported = TestHarness::new();
    files::import_poles_file(&reimported.state, &target).unwrap();
    assert_eq!(reimported.categories(), source.categories());
    let labels: Vec<String> = reimported.poles().into_iter().map(|p| p.label).collect();
    assert_eq!(labels, vec!["T-01", "T-02", "Tiang 3", "T-04"]);
    assert!(matches!(
        read_rows(std::path::Path::new(&target)).unwrap()[0]
            .iter()
            .find(|(h, _)| *h == "No")
            .map(|(_, v)| v.clone()),
        Some(SavedCellValue::Number(n)) if n == 1.0
    ));
}
