//! FILENAME: core/engine/src/category.rs
//! PURPOSE: Pole category codes and the position of a pole within the line.
//! CONTEXT: Category order (TM1, TM2, TM10, TM4) is the canonical order used
//! by every ordered map, report and exported sheet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed pole construction categories, each with its own unit pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    TM1,
    TM2,
    TM10,
    TM4,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::TM1, Category::TM2, Category::TM10, Category::TM4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TM1 => "TM1",
            Category::TM2 => "TM2",
            Category::TM10 => "TM10",
            Category::TM4 => "TM4",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown pole category: '{0}' (expected TM1, TM2, TM10 or TM4)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts `TM1`, `tm 10`, `TM-4`, `tm_2` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_uppercase();

        match compact.as_str() {
            "TM1" => Ok(Category::TM1),
            "TM2" => Ok(Category::TM2),
            "TM10" => Ok(Category::TM10),
            "TM4" => Ok(Category::TM4),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Position of a pole in the ordered line (posisi awal / tengah / akhir).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    First,
    Middle,
    Last,
}

impl Position {
    /// Label used in exported sheets.
    pub fn label(&self) -> &'static str {
        match self {
            Position::First => "awal",
            Position::Middle => "tengah",
            Position::Last => "akhir",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a pole record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoleSource {
    Manual,
    Import,
}

impl PoleSource {
    pub fn label(&self) -> &'static str {
        match self {
            PoleSource::Manual => "Manual Input",
            PoleSource::Import => "File Import",
        }
    }
}
