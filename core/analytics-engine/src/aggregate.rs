//! FILENAME: core/analytics-engine/src/aggregate.rs
//! Aggregation Engine - Scalar summaries and grouped sums.
//!
//! Grouping is a single pass that accumulates into a vector of groups in
//! first-seen order, followed by one sort by the requested key.

use std::cmp::Ordering;
use engine::{month_ordinal, Dimension, Record};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

// ============================================================================
// SUMMARY
// ============================================================================

/// Scalar totals over a filtered record set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub total_sales: f64,
    /// Saturates at `u64::MAX`.
    pub total_quantity: u64,
    /// Number of distinct order identifiers.
    pub total_orders: usize,
    /// `total_sales / total_orders`, exactly 0 when there are no orders.
    pub average_sales_per_order: f64,
}

pub fn summarize(records: &[&Record]) -> AggregateSummary {
    let mut total_sales = 0.0;
    let mut total_quantity = 0u64;
    let mut orders: FxHashSet<&str> = FxHashSet::default();

    for record in records {
        total_sales += record.sales;
        total_quantity = total_quantity.saturating_add(record.quantity.as_quantity());
        orders.insert(record.order_id.as_str());
    }

    let total_orders = orders.len();
    let average_sales_per_order = if total_orders > 0 {
        total_sales / total_orders as f64
    } else {
        0.0
    };

    AggregateSummary {
        total_sales,
        total_quantity,
        total_orders,
        average_sales_per_order,
    }
}

// ============================================================================
// GROUPED AGGREGATES
// ============================================================================

/// How the groups of a grouped aggregate are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupOrder {
    /// The dimension's own order: calendar months, numeric hours, names A-Z.
    Natural,
    /// Largest quantity first, ties by key ascending.
    QuantityDescending,
    /// Largest sales first, ties by key ascending.
    SalesDescending,
}

impl GroupOrder {
    /// Default ordering used by the dashboard for each dimension.
    pub fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Product => GroupOrder::QuantityDescending,
            Dimension::Month | Dimension::City | Dimension::Hour => GroupOrder::Natural,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRow {
    pub key: String,
    pub sales: f64,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedAggregate {
    pub dimension: Dimension,
    pub order: GroupOrder,
    pub rows: Vec<GroupRow>,
}

impl GroupedAggregate {
    pub fn get(&self, key: &str) -> Option<&GroupRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.key.as_str()).collect()
    }

    pub fn total_sales(&self) -> f64 {
        self.rows.iter().map(|row| row.sales).sum()
    }

    pub fn total_quantity(&self) -> u64 {
        self.rows
            .iter()
            .fold(0u64, |total, row| total.saturating_add(row.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Groups by `dimension` using its default order (see `GroupOrder::for_dimension`).
pub fn group_by(records: &[&Record], dimension: Dimension) -> GroupedAggregate {
    group_by_ordered(records, dimension, GroupOrder::for_dimension(dimension))
}

pub fn group_by_ordered(
    records: &[&Record],
    dimension: Dimension,
    order: GroupOrder,
) -> GroupedAggregate {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut rows: Vec<GroupRow> = Vec::new();

    for record in records {
        let key = record.dimension_value(dimension);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                index.insert(key.clone(), rows.len());
                rows.push(GroupRow {
                    key,
                    sales: 0.0,
                    quantity: 0,
                });
                rows.len() - 1
            }
        };

        let row = &mut rows[slot];
        row.sales += record.sales;
        row.quantity = row.quantity.saturating_add(record.quantity.as_quantity());
    }

    match order {
        GroupOrder::Natural => rows.sort_by(|a, b| natural_cmp(dimension, &a.key, &b.key)),
        GroupOrder::QuantityDescending => rows.sort_by(|a, b| {
            b.quantity.cmp(&a.quantity).then_with(|| a.key.cmp(&b.key))
        }),
        GroupOrder::SalesDescending => rows.sort_by(|a, b| {
            b.sales
                .partial_cmp(&a.sales)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.key.cmp(&b.key))
        }),
    }

    GroupedAggregate {
        dimension,
        order,
        rows,
    }
}

/// Natural ordering of two keys of the same dimension.
fn natural_cmp(dimension: Dimension, a: &str, b: &str) -> Ordering {
    match dimension {
        // Recognised months in calendar order, anything else after them by name
        Dimension::Month => match (month_ordinal(a), month_ordinal(b)) {
            (Some(ma), Some(mb)) => ma.cmp(&mb).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        },
        Dimension::Hour => match (a.parse::<u32>(), b.parse::<u32>()) {
            (Ok(ha), Ok(hb)) => ha.cmp(&hb),
            _ => a.cmp(b),
        },
        Dimension::City | Dimension::Product => a.cmp(b),
    }
}
