//! FILENAME: core/engine/src/registry.rs
//! PURPOSE: Ordered list of pole records with derived position and category.
//! CONTEXT: Categories follow a two-phase scheme. The angle class is fixed
//! when a record is created; `recompute` then overrides by position on every
//! pass (first -> starting category, last -> TM4, middle -> angle class).
//! Recompute always rewrites the whole list, never incrementally.

use crate::category::{Category, Position};
use crate::pole::{PoleId, PoleRecord};
use log::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoleRegistry {
    poles: Vec<PoleRecord>,
}

impl PoleRegistry {
    pub fn new() -> Self {
        PoleRegistry { poles: Vec::new() }
    }

    /// Append a manually entered pole and return its id.
    /// The initial position is `First` for an empty registry, else `Middle`.
    pub fn add(&mut self, angle_degrees: f64) -> PoleId {
        self.add_record(PoleRecord::manual(angle_degrees))
    }

    /// Append an already built record, assigning the sequential position.
    pub fn add_record(&mut self, record: PoleRecord) -> PoleId {
        let position = if self.poles.is_empty() {
            Position::First
        } else {
            Position::Middle
        };
        let record = record.with_position(position);
        let id = record.id;
        debug!("registry: add pole {} angle={}", id, record.angle_degrees);
        self.poles.push(record);
        id
    }

    /// Delete the record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: PoleId) -> bool {
        let before = self.poles.len();
        self.poles.retain(|p| p.id != id);
        let removed = self.poles.len() != before;
        if removed {
            debug!("registry: removed pole {}", id);
        }
        removed
    }

    /// Replace the whole registry (destructive import).
    pub fn replace_all(&mut self, records: Vec<PoleRecord>) {
        debug!("registry: replacing {} poles with {}", self.poles.len(), records.len());
        self.poles = records;
    }

    /// Reassign position for every record, then apply the position override.
    pub fn recompute(&mut self, starting_category: Category) {
        let count = self.poles.len();
        for (index, pole) in self.poles.iter_mut().enumerate() {
            pole.position = if index == 0 {
                Position::First
            } else if index == count - 1 {
                Position::Last
            } else {
                Position::Middle
            };

            pole.category = match pole.position {
                Position::First => starting_category,
                Position::Last => Category::TM4,
                Position::Middle => pole.classified,
            };
        }
    }

    pub fn len(&self) -> usize {
        self.poles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PoleRecord> {
        self.poles.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut PoleRecord> {
        self.poles.iter_mut()
    }

    pub fn get(&self, id: PoleId) -> Option<&PoleRecord> {
        self.poles.iter().find(|p| p.id == id)
    }

    /// Record at a 0-based index.
    pub fn at(&self, index: usize) -> Option<&PoleRecord> {
        self.poles.get(index)
    }

    pub fn first(&self) -> Option<&PoleRecord> {
        self.poles.first()
    }

    pub fn last(&self) -> Option<&PoleRecord> {
        self.poles.last()
    }
}
