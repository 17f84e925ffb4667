//! FILENAME: core/persistence/src/export.rs
//! PURPOSE: Serialize the current project into the four RAB sheets.
//! CONTEXT: Pure serialization of state the engine already derived; no
//! business logic happens here.

use crate::{save_xlsx, PersistenceError, SavedCellValue, Sheet, Workbook};
use chrono::NaiveDate;
use log::info;
use std::path::{Path, PathBuf};
use tiang_engine::Project;

pub const EXPORT_FILE_PREFIX: &str = "RAB_Tiang_Listrik";

pub const SHEET_POLES: &str = "Data Tiang";
pub const SHEET_CLASSIFICATION: &str = "Klasifikasi";
pub const SHEET_RAB: &str = "RAB";
pub const SHEET_PRICES: &str = "Database Harga";

/// `RAB_Tiang_Listrik_YYYY-MM-DD.xlsx`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}_{}.xlsx", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

pub fn build_export(project: &Project) -> Workbook {
    let mut workbook = Workbook::new();
    workbook.sheets.push(pole_sheet(project));
    workbook.sheets.push(classification_sheet(project));
    workbook.sheets.push(rab_sheet(project));
    workbook.sheets.push(price_sheet(project));
    workbook
}

/// Write the export. A directory target gets the dated default file name.
pub fn export_project(
    project: &Project,
    target: &Path,
    date: NaiveDate,
) -> Result<PathBuf, PersistenceError> {
    let path = if target.is_dir() {
        target.join(export_file_name(date))
    } else {
        target.to_path_buf()
    };

    save_xlsx(&build_export(project), &path)?;
    info!("exported {} poles to {}", project.registry().len(), path.display());
    Ok(path)
}

fn text(s: &str) -> SavedCellValue {
    SavedCellValue::Text(s.to_string())
}

fn optional_text(s: Option<&str>) -> SavedCellValue {
    s.map(text).unwrap_or(SavedCellValue::Empty)
}

fn pole_sheet(project: &Project) -> Sheet {
    let mut sheet = Sheet::new(
        SHEET_POLES,
        &[
            "No",
            "Latitude",
            "Longitude",
            "Label",
            "Sudut (derajat)",
            "Kategori_Asli",
            "Kategori_Berdasarkan_Sudut",
            "Kategori_Final",
            "Posisi",
            "Sumber_Data",
        ],
    )
    .with_column_width(3, 18.0)
    .with_column_width(6, 26.0);

    for (index, pole) in project.registry().iter().enumerate() {
        sheet.push_row(vec![
            SavedCellValue::Number((index + 1) as f64),
            optional_text(pole.latitude.as_deref()),
            optional_text(pole.longitude.as_deref()),
            text(&pole.display_label(index)),
            SavedCellValue::Number(pole.angle_degrees),
            optional_text(pole.original_category.as_deref()),
            text(pole.classified.as_str()),
            text(pole.category.as_str()),
            text(pole.position.label()),
            text(pole.source.label()),
        ]);
    }
    sheet
}

fn classification_sheet(project: &Project) -> Sheet {
    let mut sheet = Sheet::new(SHEET_CLASSIFICATION, &["Kategori", "Jumlah"]);
    for (category, count) in &project.aggregate().counts {
        sheet.push_row(vec![text(category.as_str()), SavedCellValue::Number(*count as f64)]);
    }
    sheet
}

fn rab_sheet(project: &Project) -> Sheet {
    let mut sheet = Sheet::new(
        SHEET_RAB,
        &["Kategori", "Jumlah", "Material", "Tukang", "Alat", "Total"],
    )
    .with_column_width(0, 14.0);
    for col in 2..=5 {
        sheet = sheet.with_column_width(col, 18.0);
    }

    let aggregate = project.aggregate();
    for (category, row) in &aggregate.rows {
        sheet.push_row(vec![
            text(category.as_str()),
            SavedCellValue::Number(row.count as f64),
            SavedCellValue::Currency(row.material),
            SavedCellValue::Currency(row.labor),
            SavedCellValue::Currency(row.equipment),
            SavedCellValue::Currency(row.total),
        ]);
    }

    sheet.push_row(vec![
        text("GRAND TOTAL"),
        SavedCellValue::Empty,
        SavedCellValue::Empty,
        SavedCellValue::Empty,
        SavedCellValue::Empty,
        SavedCellValue::Currency(aggregate.grand_total),
    ]);
    sheet
}

fn price_sheet(project: &Project) -> Sheet {
    let mut sheet = Sheet::new(SHEET_PRICES, &["Kategori", "Material", "Tukang", "Alat"]);
    for col in 1..=3 {
        sheet = sheet.with_column_width(col, 18.0);
    }

    for (category, entry) in project.prices().iter() {
        sheet.push_row(vec![
            text(category.as_str()),
            SavedCellValue::Currency(entry.material),
            SavedCellValue::Currency(entry.labor),
            SavedCellValue::Currency(entry.equipment),
        ]);
    }
    sheet
}
