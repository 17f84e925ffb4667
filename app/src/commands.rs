//! FILENAME: app/src/commands.rs
// PURPOSE: Pole and price commands (manual entry side of the tool).

use crate::api_types::{PoleData, RabSummary, ReportData};
use crate::{log_enter, log_exit, AppState};
use tiang_engine::{classify, parse_lenient, Category, PoleId, PriceField};
use tiang_persistence::ProjectConfig;

// ============================================================================
// POLES
// ============================================================================

/// Add a pole from the manual angle field. Blank or non-numeric input is
/// ignored and returns `Ok(None)`.
pub fn add_pole(state: &AppState, input: &str) -> Result<Option<PoleData>, String> {
    log_enter!("CMD", "add_pole", "input={:?}", input);
    let mut project = state.project.lock().map_err(|e| e.to_string())?;

    // New poles are appended, so the index is the last one
    let added = project.add_pole(input).and_then(|id| {
        let registry = project.registry();
        registry
            .get(id)
            .map(|pole| PoleData::from_record(registry.len() - 1, pole))
    });

    log_exit!("CMD", "add_pole", "added={}", added.is_some());
    Ok(added)
}

/// Remove a pole by id. Unknown ids are not an error.
pub fn remove_pole(state: &AppState, id: &str) -> Result<bool, String> {
    log_enter!("CMD", "remove_pole", "id={}", id);
    let mut project = state.project.lock().map_err(|e| e.to_string())?;

    let target: Option<PoleId> = project
        .registry()
        .iter()
        .find(|p| p.id.to_string() == id)
        .map(|p| p.id);

    let removed = match target {
        Some(id) => project.remove_pole(id),
        None => false,
    };
    log_exit!("CMD", "remove_pole", "removed={}", removed);
    Ok(removed)
}

/// Remove poles by 1-based line numbers, all numbers referring to the line
/// as it was before any removal. Returns how many were removed.
pub fn remove_poles_at(state: &AppState, numbers: &[usize]) -> Result<usize, String> {
    let mut project = state.project.lock().map_err(|e| e.to_string())?;

    let mut ids: Vec<PoleId> = numbers
        .iter()
        .filter_map(|n| n.checked_sub(1))
        .filter_map(|index| project.registry().at(index).map(|p| p.id))
        .collect();
    ids.dedup();

    let mut removed = 0;
    for id in ids {
        if project.remove_pole(id) {
            removed += 1;
        }
    }
    Ok(removed)
}

pub fn get_poles(state: &AppState) -> Result<Vec<PoleData>, String> {
    let project = state.project.lock().map_err(|e| e.to_string())?;
    Ok(project
        .registry()
        .iter()
        .enumerate()
        .map(|(index, pole)| PoleData::from_record(index, pole))
        .collect())
}

/// Recompute middle-pole angles from coordinates; returns how many changed.
pub fn derive_angles_from_coordinates(state: &AppState) -> Result<usize, String> {
    let mut project = state.project.lock().map_err(|e| e.to_string())?;
    Ok(project.derive_angles_from_coordinates())
}

// ============================================================================
// CONFIGURATION
// ============================================================================

pub fn set_starting_category(state: &AppState, category: &str) -> Result<Category, String> {
    let category = category.parse::<Category>().map_err(|e| e.to_string())?;
    let mut project = state.project.lock().map_err(|e| e.to_string())?;
    project.set_starting_category(category);
    Ok(category)
}

/// Manual price edit; unparseable values are stored as 0.
pub fn update_price(state: &AppState, category: &str, field: &str, value: &str) -> Result<f64, String> {
    log_enter!("CMD", "update_price", "{} {}={}", category, field, value);
    let category = category.parse::<Category>().map_err(|e| e.to_string())?;
    let field = field.parse::<PriceField>().map_err(|e| e.to_string())?;

    let mut project = state.project.lock().map_err(|e| e.to_string())?;
    Ok(project.set_price(category, field, value))
}

/// Apply a `CAT.FIELD=VALUE` price override, e.g. `TM1.material=6000000`.
pub fn apply_price_override(state: &AppState, assignment: &str) -> Result<f64, String> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| format!("Invalid price override '{}': expected CAT.FIELD=VALUE", assignment))?;
    let (category, field) = key
        .split_once('.')
        .ok_or_else(|| format!("Invalid price override '{}': expected CAT.FIELD=VALUE", assignment))?;
    update_price(state, category, field, value)
}

pub fn get_config(state: &AppState) -> Result<ProjectConfig, String> {
    let project = state.project.lock().map_err(|e| e.to_string())?;
    Ok(ProjectConfig::from_project(&project))
}

// ============================================================================
// RESULTS
// ============================================================================

pub fn get_summary(state: &AppState) -> Result<RabSummary, String> {
    let project = state.project.lock().map_err(|e| e.to_string())?;
    Ok(RabSummary::from_project(&project))
}

pub fn get_report(state: &AppState) -> Result<ReportData, String> {
    let poles = get_poles(state)?;
    let summary = get_summary(state)?;
    let (poles_file, prices_file) = crate::files::imported_files(state)?;
    Ok(ReportData {
        poles,
        summary,
        poles_file,
        prices_file,
    })
}

/// Classify free-text angles without touching the project.
pub fn classify_angles(inputs: &[String]) -> Vec<(String, Category)> {
    inputs
        .iter()
        .map(|input| {
            let angle = parse_lenient(input);
            let angle = if angle.is_nan() { 0.0 } else { angle };
            (input.clone(), classify(angle))
        })
        .collect()
}
