//! FILENAME: tests/test_poles.rs
//! Integration tests for manual pole entry, position overrides and removal.

mod common;

use common::TestHarness;
use tiang_app::commands;
use tiang_engine::Category;

// ============================================================================
// MANUAL ENTRY
// ============================================================================

#[test]
fn test_single_pole_takes_starting_category() {
    let harness = TestHarness::with_angles(&["30"]);
    assert_eq!(harness.categories(), vec![Category::TM1]);
    assert_eq!(harness.poles()[0].position, "awal");
}

#[test]
fn test_line_of_four_poles() {
    let harness = TestHarness::with_angles(&["5", "20", "50", "10"]);

    assert_eq!(
        harness.categories(),
        vec![Category::TM1, Category::TM2, Category::TM10, Category::TM4]
    );
    let positions: Vec<String> = harness.poles().into_iter().map(|p| p.position).collect();
    assert_eq!(positions, vec!["awal", "tengah", "tengah", "akhir"]);
}

#[test]
fn test_blank_and_garbage_input_is_ignored() {
    let harness = TestHarness::with_angles(&["10"]);

    assert_eq!(commands::add_pole(&harness.state, "").unwrap(), None);
    assert_eq!(commands::add_pole(&harness.state, "   ").unwrap(), None);
    assert_eq!(commands::add_pole(&harness.state, "abc").unwrap(), None);
    assert_eq!(harness.poles().len(), 1);
}

#[test]
fn test_lenient_angle_prefix() {
    let harness = TestHarness::new();
    let added = commands::add_pole(&harness.state, "20 derajat").unwrap().unwrap();
    assert_eq!(added.angle_degrees, 20.0);
    assert_eq!(added.classified, Category::TM2);
}

#[test]
fn test_manual_label_falls_back_to_index() {
    let harness = TestHarness::with_angles(&["1", "2"]);
    let labels: Vec<String> = harness.poles().into_iter().map(|p| p.label).collect();
    assert_eq!(labels, vec!["Tiang 1", "Tiang 2"]);
    assert_eq!(harness.poles()[1].source, "Manual Input");
}

// ============================================================================
// STARTING CATEGORY
// ============================================================================

#[test]
fn test_starting_category_change_rewrites_first_pole() {
    let harness = TestHarness::with_angles(&["5", "20", "10"]);

    commands::set_starting_category(&harness.state, "TM10").unwrap();
    assert_eq!(
        harness.categories(),
        vec![Category::TM10, Category::TM2, Category::TM4]
    );
    assert_eq!(harness.summary().starting_category, Category::TM10);
}

#[test]
fn test_unknown_starting_category_is_rejected() {
    let harness = TestHarness::with_angles(&["5"]);
    assert!(commands::set_starting_category(&harness.state, "TM3").is_err());
    assert_eq!(harness.summary().starting_category, Category::TM1);
}

// ============================================================================
// REMOVAL
// ============================================================================

#[test]
fn test_remove_last_promotes_previous_to_last() {
    let harness = TestHarness::with_angles(&["5", "20", "50"]);
    let last_id = harness.poles()[2].id.clone();

    assert!(commands::remove_pole(&harness.state, &last_id).unwrap());
    assert_eq!(harness.categories(), vec![Category::TM1, Category::TM4]);
}

#[test]
fn test_remove_first_restores_angle_class_of_new_middle() {
    let harness = TestHarness::with_angles(&["5", "20", "50", "10"]);

    // Pole 2 (20 degrees) becomes first; pole 3 stays middle with its own class
    assert_eq!(commands::remove_poles_at(&harness.state, &[1]).unwrap(), 1);
    assert_eq!(
        harness.categories(),
        vec![Category::TM1, Category::TM10, Category::TM4]
    );
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let harness = TestHarness::with_angles(&["5", "20"]);
    assert!(!commands::remove_pole(&harness.state, "no-such-id").unwrap());
    assert_eq!(harness.poles().len(), 2);
}

#[test]
fn test_remove_by_numbers_uses_original_numbering() {
    let harness = TestHarness::with_angles(&["5", "20", "50", "10", "12"]);

    let removed = commands::remove_poles_at(&harness.state, &[2, 4, 9, 0]).unwrap();
    assert_eq!(removed, 2);
    let angles: Vec<f64> = harness.poles().iter().map(|p| p.angle_degrees).collect();
    assert_eq!(angles, vec![5.0, 50.0, 12.0]);
}

#[test]
fn test_removing_everything_empties_summary() {
    let harness = TestHarness::with_angles(&["5"]);
    let id = harness.poles()[0].id.clone();
    commands::remove_pole(&harness.state, &id).unwrap();

    let summary = harness.summary();
    assert_eq!(summary.pole_count, 0);
    assert!(summary.counts.is_empty());
    assert_eq!(summary.grand_total, 0.0);
}

// ============================================================================
// CLASSIFY
// ============================================================================

#[test]
fn test_classify_boundaries() {
    let inputs: Vec<String> = ["15", "15.5", "16", "45", "45.5", "46", "-3", "x"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let categories: Vec<Category> = commands::classify_angles(&inputs)
        .into_iter()
        .map(|(_, c)| c)
        .collect();

    assert_eq!(
        categories,
        vec![
            Category::TM1,
            Category::TM1,
            Category::TM2,
            Category::TM2,
            Category::TM1,
            Category::TM10,
            Category::TM1,
            Category::TM1,
        ]
    );
}
