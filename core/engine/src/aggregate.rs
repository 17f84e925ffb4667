//! FILENAME: core/engine/src/aggregate.rs
//! PURPOSE: Category counts and RAB (cost estimate) totals.
//! CONTEXT: A pure function of the registry and the price table. It reads
//! each record's effective category as already set by the registry's
//! position override and performs no position logic of its own.

use crate::category::Category;
use crate::price::{PriceEntry, PriceTable};
use crate::registry::PoleRegistry;
use serde::Serialize;
use std::collections::BTreeMap;

/// Cost totals for one category: unit price multiplied by count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateRow {
    pub count: usize,
    pub material: f64,
    pub labor: f64,
    pub equipment: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregate {
    pub counts: BTreeMap<Category, usize>,
    pub rows: BTreeMap<Category, AggregateRow>,
    pub grand_total: f64,
}

impl Aggregate {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

pub fn aggregate(registry: &PoleRegistry, prices: &PriceTable) -> Aggregate {
    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
    for pole in registry.iter() {
        *counts.entry(pole.category).or_insert(0) += 1;
    }

    let rows: BTreeMap<Category, AggregateRow> = counts
        .iter()
        .map(|(category, count)| {
            // A category without a price entry costs nothing
            let price = prices.get(*category).copied().unwrap_or_default();
            (*category, row_for(&price, *count))
        })
        .collect();

    let grand_total = rows.values().map(|row| row.total).sum();

    Aggregate {
        counts,
        rows,
        grand_total,
    }
}

fn row_for(price: &PriceEntry, count: usize) -> AggregateRow {
    let n = count as f64;
    AggregateRow {
        count,
        material: price.material * n,
        labor: price.labor * n,
        equipment: price.equipment * n,
        total: price.unit_total() * n,
    }
}
