//! FILENAME: core/persistence/src/price_import.rs
//! PURPOSE: Build a price-table delta from the rows of a price sheet.
//! CONTEXT: The category comes from the free-text URAIAN column by raw
//! substring tests in the order TM1, TM2, TM10, TM4. "TM10" also contains
//! "TM1", so such rows land on TM1. This double match is kept as is.

use crate::aliases::{lookup_number, lookup_text, Field, PRICE_FIELDS};
use crate::error::PersistenceError;
use crate::row::SheetRow;
use log::{debug, info};
use tiang_engine::{Category, PriceTable};

/// Equipment (alat) is estimated as this share of material.
pub const EQUIPMENT_RATIO: f64 = 0.10;

/// Substring candidates per category, tested in order; first hit wins.
const CATEGORY_TOKENS: &[(Category, &[&str])] = &[
    (Category::TM1, &["TM1", "TM 1"]),
    (Category::TM2, &["TM2", "TM 2"]),
    (Category::TM10, &["TM10", "TM 10"]),
    (Category::TM4, &["TM4", "TM 4"]),
];

#[derive(Debug, Clone, PartialEq)]
pub struct PriceImport {
    /// Entries for every category detected in the sheet.
    pub delta: PriceTable,
    pub skipped_rows: usize,
}

impl PriceImport {
    pub fn categories_updated(&self) -> usize {
        self.delta.len()
    }
}

/// Detect the category named in an (already uppercased) description.
pub fn detect_category(description: &str) -> Option<Category> {
    CATEGORY_TOKENS
        .iter()
        .find(|(_, tokens)| tokens.iter().any(|token| description.contains(token)))
        .map(|(category, _)| *category)
}

pub fn import_prices(rows: &[SheetRow]) -> Result<PriceImport, PersistenceError> {
    let mut delta = PriceTable::empty();
    let mut skipped_rows = 0;

    for (index, row) in rows.iter().enumerate() {
        let description = lookup_text(row, PRICE_FIELDS, Field::Description)
            .unwrap_or_default()
            .to_uppercase();

        let Some(category) = detect_category(&description) else {
            debug!("price import: row {} has no category token, skipped", index + 2);
            skipped_rows += 1;
            continue;
        };

        let unit_price = lookup_number(row, PRICE_FIELDS, Field::UnitPrice);
        let cash_install = lookup_number(row, PRICE_FIELDS, Field::CashInstall);
        let material = lookup_number(row, PRICE_FIELDS, Field::Material);
        let install = lookup_number(row, PRICE_FIELDS, Field::Install);

        let entry = delta.entry_mut(category);

        if material > 0.0 {
            entry.material = material;
        } else if unit_price > 0.0 {
            entry.material = unit_price;
        }

        if install > 0.0 {
            entry.labor = install;
        } else if cash_install > 0.0 {
            entry.labor = cash_install;
        }

        if entry.material > 0.0 {
            entry.equipment = (entry.material * EQUIPMENT_RATIO).round();
        }
    }

    if delta.is_empty() {
        return Err(PersistenceError::NoPriceCategories);
    }

    info!(
        "price import: {} categories detected, {} rows skipped",
        delta.len(),
        skipped_rows
    );
    Ok(PriceImport {
        delta,
        skipped_rows,
    })
}
