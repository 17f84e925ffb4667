//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for the RAB controller integration tests.

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tiang_app::{commands, create_app_state, AppState, PoleData, RabSummary};
use tiang_engine::Category;

/// One fixture cell.
pub enum Fx<'a> {
    T(&'a str),
    N(f64),
}

/// Test harness owning an app state and a scratch directory.
pub struct TestHarness {
    pub state: AppState,
    pub dir: TempDir,
}

impl TestHarness {
    /// Empty project with default prices and TM1 start.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(),
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Project with manual poles at the given angles.
    pub fn with_angles(angles: &[&str]) -> Self {
        let harness = Self::new();
        for angle in angles {
            commands::add_pole(&harness.state, angle).unwrap();
        }
        harness
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn poles(&self) -> Vec<PoleData> {
        commands::get_poles(&self.state).unwrap()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.poles().iter().map(|p| p.category).collect()
    }

    pub fn summary(&self) -> RabSummary {
        commands::get_summary(&self.state).unwrap()
    }

    pub fn count(&self, category: Category) -> usize {
        self.summary().counts.get(&category).copied().unwrap_or(0)
    }

    /// Write a single-sheet xlsx fixture and return its path.
    pub fn write_xlsx(&self, name: &str, headers: &[&str], rows: &[Vec<Fx>]) -> PathBuf {
        let path = self.path(name);
        write_xlsx_fixture(&path, headers, rows);
        path
    }

    /// Write a CSV fixture from raw text.
    pub fn write_csv(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, text).unwrap();
        path
    }
}

pub fn write_xlsx_fixture(path: &Path, headers: &[&str], rows: &[Vec<Fx>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            let r = (r + 1) as u32;
            match cell {
                Fx::T(s) => {
                    sheet.write_string(r, col as u16, *s).unwrap();
                }
                Fx::N(n) => {
                    sheet.write_number(r, col as u16, *n).unwrap();
                }
            }
        }
    }
    workbook.save(path).unwrap();
}
