//! FILENAME: app/src/api_types.rs
// PURPOSE: Serializable views of project state returned by the commands.

use serde::Serialize;
use std::collections::BTreeMap;
use tiang_engine::{format_rupiah, Aggregate, AggregateRow, Category, PoleRecord, Project};

/// One pole as shown in the pole list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoleData {
    pub id: String,
    /// 1-based position in the line
    pub number: usize,
    pub label: String,
    pub angle_degrees: f64,
    pub classified: Category,
    pub category: Category,
    pub position: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub original_category: Option<String>,
    pub source: String,
}

impl PoleData {
    pub fn from_record(index: usize, pole: &PoleRecord) -> Self {
        PoleData {
            id: pole.id.to_string(),
            number: index + 1,
            label: pole.display_label(index),
            angle_degrees: pole.angle_degrees,
            classified: pole.classified,
            category: pole.category,
            position: pole.position.label().to_string(),
            latitude: pole.latitude.clone(),
            longitude: pole.longitude.clone(),
            original_category: pole.original_category.clone(),
            source: pole.source.label().to_string(),
        }
    }
}

/// Counts, RAB rows and grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RabSummary {
    pub starting_category: Category,
    pub pole_count: usize,
    pub counts: BTreeMap<Category, usize>,
    pub rows: BTreeMap<Category, AggregateRow>,
    pub grand_total: f64,
    pub grand_total_display: String,
}

impl RabSummary {
    pub fn from_project(project: &Project) -> Self {
        let Aggregate {
            counts,
            rows,
            grand_total,
        } = project.aggregate().clone();

        RabSummary {
            starting_category: project.starting_category(),
            pole_count: project.registry().len(),
            counts,
            rows,
            grand_total,
            grand_total_display: format_rupiah(grand_total),
        }
    }
}

/// Outcome of a file import, shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSummary {
    pub file: String,
    /// Poles imported, or price categories updated
    pub count: usize,
    pub skipped_rows: usize,
    pub message: String,
}

/// Full report: pole list plus summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub poles: Vec<PoleData>,
    pub summary: RabSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poles_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices_file: Option<String>,
}
