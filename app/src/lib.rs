//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point (controller for the RAB tool).
// CONTEXT: `AppState` is the single owner of the project. Commands lock it,
//          apply one operation (which re-derives counts and totals before
//          returning) and hand back serializable views.

use std::sync::Mutex;
use tiang_engine::Project;
use tiang_persistence::ProjectConfig;

pub mod api_types;
pub mod cli;
pub mod commands;
pub mod files;
pub mod logging;
pub mod report;

pub use api_types::{ImportSummary, PoleData, RabSummary, ReportData};
pub use files::FileState;
pub use logging::{init_logging, next_seq, write_log};

// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct AppState {
    pub project: Mutex<Project>,
    /// Last imported files and the import-in-progress flag
    pub file_state: FileState,
}

pub fn create_app_state() -> AppState {
    AppState {
        project: Mutex::new(Project::default()),
        file_state: FileState::default(),
    }
}

/// State seeded from a project config file.
pub fn create_app_state_with(config: &ProjectConfig) -> AppState {
    let mut project = Project::default();
    config.apply(&mut project);
    AppState {
        project: Mutex::new(project),
        file_state: FileState::default(),
    }
}
