//! FILENAME: core/persistence/src/aliases.rs
//! PURPOSE: Accepted column names for every logical field of an import.
//! CONTEXT: The tables are plain data. Headers match case-insensitively with
//! whitespace collapsed, and the first alias holding a present value wins.
//! Extend a table to accept a new column spelling.

use crate::row::{SavedCellValue, SheetRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
    Label,
    Angle,
    OriginalCategory,
    Description,
    UnitPrice,
    CashInstall,
    Material,
    Install,
}

pub struct FieldAliases {
    pub field: Field,
    pub aliases: &'static [&'static str],
}

/// Pole sheet: Latitude, Longitude, Label, Sudut (derajat), Kategori
pub const POLE_FIELDS: &[FieldAliases] = &[
    FieldAliases { field: Field::Latitude, aliases: &["Latitude", "Lat"] },
    FieldAliases { field: Field::Longitude, aliases: &["Longitude", "Lon", "Lng"] },
    FieldAliases { field: Field::Label, aliases: &["Label", "Nama"] },
    FieldAliases { field: Field::Angle, aliases: &["Sudut (derajat)", "Sudut"] },
    FieldAliases { field: Field::OriginalCategory, aliases: &["Kategori"] },
];

/// Price sheet: NO, MVTIC SAT, URAIAN, HARGA SATUAN, PSG TUNAI PLN, MATERIAL, PASANG
pub const PRICE_FIELDS: &[FieldAliases] = &[
    FieldAliases { field: Field::Description, aliases: &["URAIAN"] },
    FieldAliases { field: Field::UnitPrice, aliases: &["HARGA SATUAN"] },
    FieldAliases { field: Field::CashInstall, aliases: &["PSG TUNAI PLN"] },
    FieldAliases { field: Field::Material, aliases: &["MATERIAL"] },
    FieldAliases { field: Field::Install, aliases: &["PASANG"] },
];

/// Lowercase, trim and collapse inner whitespace runs to one space.
pub fn normalize_header(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolve `field` in `row` through `table`. Aliases are tried in order;
/// for each alias the row's columns are scanned in sheet order.
pub fn lookup<'a>(row: &'a SheetRow, table: &[FieldAliases], field: Field) -> Option<&'a SavedCellValue> {
    let entry = table.iter().find(|entry| entry.field == field)?;

    entry.aliases.iter().find_map(|alias| {
        let wanted = normalize_header(alias);
        row.iter()
            .find(|(header, value)| normalize_header(header) == wanted && value.is_present())
            .map(|(_, value)| value)
    })
}

/// Numeric field; absent or unparseable reads as 0.
pub fn lookup_number(row: &SheetRow, table: &[FieldAliases], field: Field) -> f64 {
    let value = lookup(row, table, field).map(|v| v.as_number()).unwrap_or(0.0);
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

pub fn lookup_text(row: &SheetRow, table: &[FieldAliases], field: Field) -> Option<String> {
    lookup(row, table, field).map(|v| v.as_text())
}
