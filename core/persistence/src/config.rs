//! FILENAME: core/persistence/src/config.rs
//! PURPOSE: Optional JSON project file (starting category and unit prices).
//! CONTEXT: Compiled-in defaults apply first, then this file, then any
//! command-line overrides.

use crate::PersistenceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tiang_engine::{Category, PriceField, Project};

/// Partial price entry; missing fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<f64>,
    #[serde(default, alias = "tukang", skip_serializing_if = "Option::is_none")]
    pub labor: Option<f64>,
    #[serde(default, alias = "alat", skip_serializing_if = "Option::is_none")]
    pub equipment: Option<f64>,
}

impl PriceOverride {
    fn fields(&self) -> [(PriceField, Option<f64>); 3] {
        [
            (PriceField::Material, self.material),
            (PriceField::Labor, self.labor),
            (PriceField::Equipment, self.equipment),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_category: Option<Category>,
    #[serde(default)]
    pub prices: BTreeMap<Category, PriceOverride>,
}

impl ProjectConfig {
    /// Snapshot of the project's effective configuration.
    pub fn from_project(project: &Project) -> Self {
        let prices = project
            .prices()
            .iter()
            .map(|(category, entry)| {
                (
                    category,
                    PriceOverride {
                        material: Some(entry.material),
                        labor: Some(entry.labor),
                        equipment: Some(entry.equipment),
                    },
                )
            })
            .collect();

        ProjectConfig {
            starting_category: Some(project.starting_category()),
            prices,
        }
    }

    pub fn validate(&self) -> Result<(), PersistenceError> {
        for (category, entry) in &self.prices {
            for (field, value) in entry.fields() {
                if let Some(v) = value {
                    if !v.is_finite() || v < 0.0 {
                        return Err(PersistenceError::InvalidConfig(format!(
                            "{} {} must be a non-negative number, got {}",
                            category, field, v
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn apply(&self, project: &mut Project) {
        for (category, entry) in &self.prices {
            let mut current = project.prices().get(*category).copied().unwrap_or_default();
            for (field, value) in entry.fields() {
                if let Some(v) = value {
                    current.set(field, v);
                }
            }
            project.set_price_entry(*category, current);
        }
        if let Some(category) = self.starting_category {
            project.set_starting_category(category);
        }
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn load_config(path: &Path) -> Result<ProjectConfig, PersistenceError> {
    let text = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}
