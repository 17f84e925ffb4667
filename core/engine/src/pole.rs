//! FILENAME: core/engine/src/pole.rs
//! PURPOSE: A single pole (tiang) record.
//! CONTEXT: `classified` is the angle-based category fixed at creation time.
//! `category` and `position` are derived and rewritten by
//! `PoleRegistry::recompute` after every change to the registry.

use crate::category::{Category, PoleSource, Position};
use crate::classifier::classify;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique token identifying a pole for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoleId(Uuid);

impl PoleId {
    pub fn new() -> Self {
        PoleId(Uuid::new_v4())
    }
}

impl Default for PoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoleRecord {
    pub id: PoleId,
    pub angle_degrees: f64,
    /// Angle-based category, computed once when the record is created.
    pub classified: Category,
    /// Effective category after the position override.
    pub category: Category,
    pub position: Position,
    pub label: String,
    /// Category text found in an imported sheet. Informational only.
    pub original_category: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub source: PoleSource,
}

impl PoleRecord {
    /// Create a manually entered pole. The label is empty until an export
    /// or report falls back to `Tiang <n>`.
    pub fn manual(angle_degrees: f64) -> Self {
        let classified = classify(angle_degrees);
        PoleRecord {
            id: PoleId::new(),
            angle_degrees,
            classified,
            category: classified,
            position: Position::Middle,
            label: String::new(),
            original_category: None,
            latitude: None,
            longitude: None,
            source: PoleSource::Manual,
        }
    }

    /// Create an imported pole with its sheet metadata.
    pub fn imported(
        angle_degrees: f64,
        label: String,
        latitude: Option<String>,
        longitude: Option<String>,
        original_category: Option<String>,
    ) -> Self {
        let classified = classify(angle_degrees);
        PoleRecord {
            id: PoleId::new(),
            angle_degrees,
            classified,
            category: classified,
            position: Position::Middle,
            label,
            original_category,
            latitude,
            longitude,
            source: PoleSource::Import,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Overwrite the stored angle and re-derive the angle-based category.
    /// The effective category is refreshed on the next recompute.
    pub fn reclassify(&mut self, angle_degrees: f64) {
        self.angle_degrees = angle_degrees;
        self.classified = classify(angle_degrees);
    }

    /// Label for display, falling back to `Tiang <n>` (1-based).
    pub fn display_label(&self, index: usize) -> String {
        if self.label.trim().is_empty() {
            format!("Tiang {}", index + 1)
        } else {
            self.label.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_record_is_classified_from_angle() {
        let pole = PoleRecord::manual(30.0);
        assert_eq!(pole.classified, Category::TM2);
        assert_eq!(pole.category, Category::TM2);
        assert_eq!(pole.source, PoleSource::Manual);
    }

    #[test]
    fn ids_are_unique() {
        let a = PoleRecord::manual(1.0);
        let b = PoleRecord::manual(1.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn display_label_falls_back_to_index() {
        let pole = PoleRecord::manual(1.0);
        assert_eq!(pole.display_label(2), "Tiang 3");

        let named = PoleRecord::imported(1.0, "A1".to_string(), None, None, None);
        assert_eq!(named.display_label(0), "A1");
    }

    #[test]
    fn reclassify_updates_angle_class_only() {
        let mut pole = PoleRecord::manual(5.0).with_position(Position::First);
        pole.reclassify(50.0);
        assert_eq!(pole.classified, Category::TM10);
        assert_eq!(pole.category, Category::TM1);
        assert_eq!(pole.position, Position::First);
    }
}
