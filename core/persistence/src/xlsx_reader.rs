// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::{PersistenceError, SavedCellValue, SheetRow};
use calamine::{open_workbook_auto, Data, Reader};
use log::{debug, info};
use std::path::Path;

/// Read the first sheet of a spreadsheet or CSV file into rows keyed by the
/// header row. Empty cells are omitted and blank rows skipped.
pub fn read_rows(path: &Path) -> Result<Vec<SheetRow>, PersistenceError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let grid = match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook_grid(path)?,
        "csv" => read_csv_grid(path)?,
        other => return Err(PersistenceError::UnsupportedFormat(other.to_string())),
    };

    let rows = rows_from_grid(grid);
    info!("read {} data rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn read_workbook_grid(path: &Path) -> Result<Vec<Vec<SavedCellValue>>, PersistenceError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let Some(first_sheet) = sheet_names.first() else {
        return Err(PersistenceError::InvalidFormat(
            "Workbook contains no sheets".to_string(),
        ));
    };

    let range = workbook.worksheet_range(first_sheet)?;

    let grid = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => SavedCellValue::Empty,
                    Data::String(s) => SavedCellValue::Text(s.clone()),
                    Data::Float(f) => SavedCellValue::Number(*f),
                    Data::Int(i) => SavedCellValue::Number(*i as f64),
                    Data::Bool(b) => SavedCellValue::Boolean(*b),
                    Data::Error(e) => SavedCellValue::Text(format!("{:?}", e)),
                    Data::DateTime(dt) => SavedCellValue::Number(dt.as_f64()),
                    Data::DateTimeIso(s) => SavedCellValue::Text(s.clone()),
                    Data::DurationIso(s) => SavedCellValue::Text(s.clone()),
                })
                .collect()
        })
        .collect();

    Ok(grid)
}

/// Separators a spreadsheet program may use when saving CSV.
const CSV_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

/// Pick the separator that occurs most often in the header line.
/// Ties and header lines without any separator fall back to `,`.
fn sniff_delimiter(content: &[u8]) -> u8 {
    let header = content.split(|b| *b == b'\n').next().unwrap_or_default();
    let mut best = (b',', 0);
    for delimiter in CSV_DELIMITERS {
        let count = header.iter().filter(|b| **b == delimiter).count();
        if count > best.1 {
            best = (delimiter, count);
        }
    }
    best.0
}

fn read_csv_grid(path: &Path) -> Result<Vec<Vec<SavedCellValue>>, PersistenceError> {
    let content = std::fs::read(path)?;
    let delimiter = sniff_delimiter(&content);
    debug!("csv: {} uses delimiter {:?}", path.display(), delimiter as char);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_slice());

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(csv_cell).collect());
    }
    Ok(grid)
}

/// CSV cells are untyped; numeric-looking text becomes a number.
/// Words such as `NaN` or `inf` stay text.
fn csv_cell(raw: &str) -> SavedCellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return SavedCellValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => SavedCellValue::Number(n),
        _ => SavedCellValue::Text(trimmed.to_string()),
    }
}

/// First grid row is the header row. Columns without a header are dropped.
pub(crate) fn rows_from_grid(grid: Vec<Vec<SavedCellValue>>) -> Vec<SheetRow> {
    let mut lines = grid.into_iter();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_line.iter().map(|h| h.as_text().trim().to_string()).collect();

    lines
        .filter_map(|line| {
            let mut row = SheetRow::new();
            for (header, value) in headers.iter().zip(line) {
                if header.is_empty() || value == SavedCellValue::Empty {
                    continue;
                }
                row.insert(header, value);
            }
            if row.is_empty() {
                None
            } else {
                Some(row)
            }
        })
        .collect()
}
