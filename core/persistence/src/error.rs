//! FILENAME: core/persistence/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Spreadsheet read error: {0}")]
    SpreadsheetRead(#[from] calamine::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported file type: {0} (use xlsx, xls, ods or csv)")]
    UnsupportedFormat(String),

    #[error(
        "No valid price data found. Make sure the URAIAN column contains TM1, TM2, TM10 or TM4."
    )]
    NoPriceCategories,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
