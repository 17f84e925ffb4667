//! FILENAME: core/persistence/src/pole_import.rs
//! PURPOSE: Build pole records from the rows of a pole sheet.
//! CONTEXT: The result replaces the whole registry (destructive import).
//! Any category text already present in the sheet is kept as
//! `original_category` for reference; the computed category always comes
//! from the angle.

use crate::aliases::{lookup_number, lookup_text, Field, POLE_FIELDS};
use crate::row::SheetRow;
use log::info;
use tiang_engine::{PoleRecord, Position};

pub fn import_poles(rows: &[SheetRow]) -> Vec<PoleRecord> {
    let records: Vec<PoleRecord> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let label = lookup_text(row, POLE_FIELDS, Field::Label)
                .unwrap_or_else(|| format!("Tiang {}", index + 1));
            let angle = lookup_number(row, POLE_FIELDS, Field::Angle);

            let position = if index == 0 {
                Position::First
            } else {
                Position::Middle
            };

            PoleRecord::imported(
                angle,
                label,
                lookup_text(row, POLE_FIELDS, Field::Latitude),
                lookup_text(row, POLE_FIELDS, Field::Longitude),
                lookup_text(row, POLE_FIELDS, Field::OriginalCategory),
            )
            .with_position(position)
        })
        .collect();

    info!("pole import: {} rows read", records.len());
    records
}
