// FILENAME: app/src/files.rs
// PURPOSE: Spreadsheet import/export commands.
// CONTEXT: Only one import runs at a time. A file is read and parsed before
//          the project is locked, so a failed import leaves state untouched.

use crate::api_types::ImportSummary;
use crate::{log_error, log_info, AppState};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tiang_persistence::{export_project, import_poles, import_prices, read_rows};

#[derive(Default)]
pub struct FileState {
    pub poles_file: Mutex<Option<String>>,
    pub prices_file: Mutex<Option<String>>,
    pub is_importing: Mutex<bool>,
}

/// Holds the import flag for the duration of one import.
struct ImportGuard<'a> {
    flag: &'a Mutex<bool>,
}

impl<'a> ImportGuard<'a> {
    fn acquire(flag: &'a Mutex<bool>) -> Result<Self, String> {
        let mut busy = flag.lock().map_err(|e| e.to_string())?;
        if *busy {
            return Err("Another import is still running".to_string());
        }
        *busy = true;
        Ok(ImportGuard { flag })
    }
}

impl Drop for ImportGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut busy) = self.flag.lock() {
            *busy = false;
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Import the pole sheet. This replaces every pole currently in the project.
pub fn import_poles_file(state: &AppState, path: &str) -> Result<ImportSummary, String> {
    let _guard = ImportGuard::acquire(&state.file_state.is_importing)?;
    let path_buf = PathBuf::from(path);

    let rows = read_rows(&path_buf).map_err(|e| {
        log_error!("FILE", "pole import failed for {}: {}", path, e);
        format!("Error reading spreadsheet: {}", e)
    })?;
    let records = import_poles(&rows);
    let count = records.len();

    state
        .project
        .lock()
        .map_err(|e| e.to_string())?
        .replace_poles(records);

    let name = file_name(&path_buf);
    *state.file_state.poles_file.lock().map_err(|e| e.to_string())? = Some(name.clone());

    log_info!("FILE", "imported {} poles from {}", count, name);
    Ok(ImportSummary {
        file: name,
        count,
        skipped_rows: 0,
        message: format!("Imported {} poles from the spreadsheet", count),
    })
}

/// Import the price sheet, overwriting only the categories it names.
pub fn import_prices_file(state: &AppState, path: &str) -> Result<ImportSummary, String> {
    let _guard = ImportGuard::acquire(&state.file_state.is_importing)?;
    let path_buf = PathBuf::from(path);

    let rows = read_rows(&path_buf).map_err(|e| {
        log_error!("FILE", "price import failed for {}: {}", path, e);
        format!("Error reading spreadsheet: {}", e)
    })?;
    let import = import_prices(&rows).map_err(|e| e.to_string())?;

    let updated = state
        .project
        .lock()
        .map_err(|e| e.to_string())?
        .merge_prices(&import.delta);

    let name = file_name(&path_buf);
    *state.file_state.prices_file.lock().map_err(|e| e.to_string())? = Some(name.clone());

    log_info!("FILE", "imported prices for {} categories from {}", updated, name);
    Ok(ImportSummary {
        file: name,
        count: updated,
        skipped_rows: import.skipped_rows,
        message: format!("Imported price data for {} categories", updated),
    })
}

/// Write the four-sheet export. A directory target gets the dated file name.
pub fn export_rab(state: &AppState, target: &str, date: NaiveDate) -> Result<String, String> {
    let project = state.project.lock().map_err(|e| e.to_string())?;
    let path = export_project(&project, Path::new(target), date).map_err(|e| e.to_string())?;
    Ok(path.display().to_string())
}

/// Names of the last imported pole and price files.
pub fn imported_files(state: &AppState) -> Result<(Option<String>, Option<String>), String> {
    let poles = state.file_state.poles_file.lock().map_err(|e| e.to_string())?.clone();
    let prices = state.file_state.prices_file.lock().map_err(|e| e.to_string())?.clone();
    Ok((poles, prices))
}

pub fn is_importing(state: &AppState) -> bool {
    state
        .file_state
        .is_importing
        .lock()
        .map(|busy| *busy)
        .unwrap_or(false)
}
