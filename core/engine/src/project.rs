//! FILENAME: core/engine/src/project.rs
//! PURPOSE: The single owner of all RAB state.
//! CONTEXT: Every mutating operation applies completely and then runs
//! `derive`, which recomputes registry positions with the current starting
//! category and rebuilds the aggregate from scratch. Readers therefore never
//! see a half-applied mutation or a stale aggregate.

use crate::aggregate::{aggregate, Aggregate};
use crate::category::{Category, Position};
use crate::classifier::parse_angle_input;
use crate::geo::{deflection_angles, parse_lat_lon};
use crate::pole::{PoleId, PoleRecord};
use crate::price::{PriceEntry, PriceField, PriceTable};
use crate::registry::PoleRegistry;
use log::debug;

#[derive(Debug, Clone)]
pub struct Project {
    registry: PoleRegistry,
    prices: PriceTable,
    starting_category: Category,
    derived: Aggregate,
}

impl Default for Project {
    fn default() -> Self {
        Self::new(Category::TM1, PriceTable::default())
    }
}

impl Project {
    pub fn new(starting_category: Category, prices: PriceTable) -> Self {
        let mut project = Project {
            registry: PoleRegistry::new(),
            prices,
            starting_category,
            derived: Aggregate::default(),
        };
        project.derive();
        project
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Add a pole from the manual angle input. Empty or non-numeric input
    /// is ignored.
    pub fn add_pole(&mut self, input: &str) -> Option<PoleId> {
        let angle = parse_angle_input(input)?;
        Some(self.add_pole_angle(angle))
    }

    pub fn add_pole_angle(&mut self, angle_degrees: f64) -> PoleId {
        let id = self.registry.add(angle_degrees);
        self.derive();
        id
    }

    pub fn remove_pole(&mut self, id: PoleId) -> bool {
        let removed = self.registry.remove(id);
        self.derive();
        removed
    }

    /// Replace every pole with `records` (destructive import).
    pub fn replace_poles(&mut self, records: Vec<PoleRecord>) {
        self.registry.replace_all(records);
        self.derive();
    }

    pub fn set_starting_category(&mut self, category: Category) {
        self.starting_category = category;
        self.derive();
    }

    /// Manual edit of one price field; returns the stored value.
    pub fn set_price(&mut self, category: Category, field: PriceField, text: &str) -> f64 {
        let value = self.prices.set_field(category, field, text);
        self.derive();
        value
    }

    pub fn set_price_entry(&mut self, category: Category, entry: PriceEntry) {
        self.prices.set(category, entry);
        self.derive();
    }

    /// Overwrite the categories present in `delta`; returns how many.
    pub fn merge_prices(&mut self, delta: &PriceTable) -> usize {
        let updated = self.prices.merge(delta);
        self.derive();
        updated
    }

    /// Recompute the angle of every middle pole from its neighbours'
    /// coordinates and re-classify it. Poles without a computable
    /// deflection keep their stored angle. Returns how many were updated.
    pub fn derive_angles_from_coordinates(&mut self) -> usize {
        let points: Vec<_> = self
            .registry
            .iter()
            .map(|p| parse_lat_lon(p.latitude.as_deref(), p.longitude.as_deref()))
            .collect();
        let angles = deflection_angles(&points);

        let mut updated = 0;
        for (pole, angle) in self.registry.iter_mut().zip(angles) {
            if let (Position::Middle, Some(angle)) = (pole.position, angle) {
                pole.reclassify(angle);
                updated += 1;
            }
        }

        self.derive();
        updated
    }

    fn derive(&mut self) {
        self.registry.recompute(self.starting_category);
        self.derived = aggregate(&self.registry, &self.prices);
        debug!(
            "project: derived {} poles, grand total {}",
            self.registry.len(),
            self.derived.grand_total
        );
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn registry(&self) -> &PoleRegistry {
        &self.registry
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn starting_category(&self) -> Category {
        self.starting_category
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.derived
    }

    pub fn grand_total(&self) -> f64 {
        self.derived.grand_total
    }
}
