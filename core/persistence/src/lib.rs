//! FILENAME: core/persistence/src/lib.rs
//! Pole RAB Persistence Module
//!
//! Reads pole and price sheets (XLSX/XLS/ODS/CSV) into the engine's types
//! and writes the four-sheet RAB export workbook.

mod aliases;
mod config;
mod error;
mod export;
mod pole_import;
mod price_import;
mod row;
mod xlsx_reader;
mod xlsx_writer;

pub use aliases::{
    lookup, lookup_number, lookup_text, normalize_header, Field, FieldAliases, POLE_FIELDS,
    PRICE_FIELDS,
};
pub use config::{load_config, PriceOverride, ProjectConfig};
pub use error::PersistenceError;
pub use export::{build_export, export_file_name, export_project, EXPORT_FILE_PREFIX};
pub use pole_import::import_poles;
pub use price_import::{detect_category, import_prices, PriceImport, EQUIPMENT_RATIO};
pub use row::{SavedCellValue, SheetRow};
pub use xlsx_reader::read_rows;
pub use xlsx_writer::save_xlsx;

use std::collections::HashMap;

// ============================================================================
// WORKBOOK
// ============================================================================

/// A workbook ready to be written
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

// ============================================================================
// SHEET
// ============================================================================

/// A single worksheet: one header row followed by data rows
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<SavedCellValue>>,
    /// Column widths in Excel character units
    pub column_widths: HashMap<u16, f64>,
}

impl Sheet {
    pub fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            column_widths: HashMap::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<SavedCellValue>) {
        self.rows.push(row);
    }

    pub fn with_column_width(mut self, col: u16, width: f64) -> Self {
        self.column_widths.insert(col, width);
        self
    }

    /// Cell of data row `row` under header `header`.
    pub fn cell(&self, row: usize, header: &str) -> Option<&SavedCellValue> {
        let col = self.headers.iter().position(|h| h == header)?;
        self.rows.get(row)?.get(col)
    }
}
