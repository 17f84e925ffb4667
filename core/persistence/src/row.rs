//! FILENAME: core/persistence/src/row.rs
//! PURPOSE: Generic tabular row (header -> cell value) read from a sheet.
//! CONTEXT: Presence follows spreadsheet-to-object truthiness: empty cells,
//! blank text, numeric zero and `false` count as absent so alias lookups
//! fall through to the next alias or the default.

use tiang_engine::parse_lenient;

/// A cell value as read from or written to a sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedCellValue {
    Empty,
    Number(f64),
    /// A number rendered as integer rupiah on export.
    Currency(f64),
    Text(String),
    Boolean(bool),
}

impl SavedCellValue {
    pub fn is_present(&self) -> bool {
        match self {
            SavedCellValue::Empty => false,
            SavedCellValue::Number(n) | SavedCellValue::Currency(n) => *n != 0.0 && !n.is_nan(),
            SavedCellValue::Text(s) => !s.trim().is_empty(),
            SavedCellValue::Boolean(b) => *b,
        }
    }

    /// Numeric reading; NaN when the value holds no number.
    pub fn as_number(&self) -> f64 {
        match self {
            SavedCellValue::Number(n) | SavedCellValue::Currency(n) => *n,
            SavedCellValue::Text(s) => parse_lenient(s),
            SavedCellValue::Empty | SavedCellValue::Boolean(_) => f64::NAN,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            SavedCellValue::Empty => String::new(),
            SavedCellValue::Number(n) | SavedCellValue::Currency(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            SavedCellValue::Text(s) => s.clone(),
            SavedCellValue::Boolean(b) => b.to_string(),
        }
    }
}

/// One data row of a sheet, keyed by the header text of its column.
/// Absent cells are simply not stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    cells: Vec<(String, SavedCellValue)>,
}

impl SheetRow {
    pub fn new() -> Self {
        SheetRow { cells: Vec::new() }
    }

    pub fn with(mut self, header: &str, value: SavedCellValue) -> Self {
        self.insert(header, value);
        self
    }

    pub fn insert(&mut self, header: &str, value: SavedCellValue) {
        self.cells.push((header.to_string(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|(_, v)| *v == SavedCellValue::Empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SavedCellValue)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_mirrors_truthiness() {
        assert!(!SavedCellValue::Empty.is_present());
        assert!(!SavedCellValue::Number(0.0).is_present());
        assert!(!SavedCellValue::Text("  ".to_string()).is_present());
        assert!(!SavedCellValue::Boolean(false).is_present());
        assert!(SavedCellValue::Number(-6.1).is_present());
        assert!(SavedCellValue::Text("0".to_string()).is_present());
    }

    #[test]
    fn test_number_and_text_readings() {
        assert_eq!(SavedCellValue::Text("25 deg".to_string()).as_number(), 25.0);
        assert!(SavedCellValue::Boolean(true).as_number().is_nan());
        assert_eq!(SavedCellValue::Number(106.0).as_text(), "106");
        assert_eq!(SavedCellValue::Number(-6.125).as_text(), "-6.125");
    }
}
