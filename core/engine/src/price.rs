//! FILENAME: core/engine/src/price.rs
//! PURPOSE: Unit price table (material, labor, equipment) per category.

use crate::category::Category;
use crate::classifier::parse_lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unit prices for one category, in whole rupiah.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub material: f64,
    /// Installation labor (tukang)
    pub labor: f64,
    /// Equipment (alat)
    pub equipment: f64,
}

impl PriceEntry {
    pub fn new(material: f64, labor: f64, equipment: f64) -> Self {
        PriceEntry {
            material,
            labor,
            equipment,
        }
    }

    pub fn unit_total(&self) -> f64 {
        self.material + self.labor + self.equipment
    }

    pub fn set(&mut self, field: PriceField, value: f64) {
        match field {
            PriceField::Material => self.material = value,
            PriceField::Labor => self.labor = value,
            PriceField::Equipment => self.equipment = value,
        }
    }
}

/// One of the three cost components of a price entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceField {
    Material,
    Labor,
    Equipment,
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriceField::Material => "material",
            PriceField::Labor => "tukang",
            PriceField::Equipment => "alat",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown price field: '{0}' (expected material, tukang or alat)")]
pub struct ParsePriceFieldError(pub String);

impl FromStr for PriceField {
    type Err = ParsePriceFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "material" => Ok(PriceField::Material),
            "tukang" | "labor" | "labour" => Ok(PriceField::Labor),
            "alat" | "equipment" => Ok(PriceField::Equipment),
            _ => Err(ParsePriceFieldError(s.to_string())),
        }
    }
}

/// Price table keyed by category in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    entries: BTreeMap<Category, PriceEntry>,
}

impl Default for PriceTable {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(Category::TM1, PriceEntry::new(5_000_000.0, 500_000.0, 200_000.0));
        entries.insert(Category::TM2, PriceEntry::new(7_500_000.0, 750_000.0, 300_000.0));
        entries.insert(Category::TM10, PriceEntry::new(12_000_000.0, 1_200_000.0, 500_000.0));
        entries.insert(Category::TM4, PriceEntry::new(8_000_000.0, 800_000.0, 350_000.0));
        PriceTable { entries }
    }
}

impl PriceTable {
    /// An empty table, used as the working delta of a price import.
    pub fn empty() -> Self {
        PriceTable {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, category: Category) -> Option<&PriceEntry> {
        self.entries.get(&category)
    }

    /// Entry for `category`, inserting a zeroed one on first touch.
    pub fn entry_mut(&mut self, category: Category) -> &mut PriceEntry {
        self.entries.entry(category).or_default()
    }

    pub fn set(&mut self, category: Category, entry: PriceEntry) {
        self.entries.insert(category, entry);
    }

    /// Manual edit of a single field. Unparseable text becomes 0 and
    /// negative values are clamped to 0.
    pub fn set_field(&mut self, category: Category, field: PriceField, text: &str) -> f64 {
        let parsed = parse_lenient(text);
        let value = if parsed.is_nan() { 0.0 } else { parsed.max(0.0) };
        self.entry_mut(category).set(field, value);
        value
    }

    /// Overwrite whole entries from `delta`. Returns how many categories
    /// were written.
    pub fn merge(&mut self, delta: &PriceTable) -> usize {
        for (category, entry) in &delta.entries {
            self.entries.insert(*category, *entry);
        }
        delta.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &PriceEntry)> {
        self.entries.iter().map(|(c, e)| (*c, e))
    }
}
