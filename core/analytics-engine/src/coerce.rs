//! FILENAME: core/analytics-engine/src/coerce.rs
//! Numeric cleaning for chart consumers.
//!
//! Charts that plot raw numeric columns (price against quantity) need every
//! plotted field to be a number. Records that fail are dropped from the
//! cleaned set only; the filtered set used for totals is left untouched.

use engine::Record;
use serde::{Deserialize, Serialize};

/// A numeric column of a sales record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericField {
    QuantityOrdered,
    PriceEach,
    Sales,
    Hour,
}

impl NumericField {
    /// The value of this field for `record`, if it is numeric.
    pub fn value(&self, record: &Record) -> Option<f64> {
        match self {
            NumericField::QuantityOrdered => record.quantity.value(),
            NumericField::PriceEach => record.price_each.value(),
            NumericField::Sales => Some(record.sales).filter(|v| v.is_finite()),
            NumericField::Hour => Some(f64::from(record.hour)),
        }
    }
}

/// Keeps the records for which every field in `fields` is numeric, in input order.
pub fn coerce_numeric<'a>(records: &[&'a Record], fields: &[NumericField]) -> Vec<&'a Record> {
    records
        .iter()
        .copied()
        .filter(|record| fields.iter().all(|field| field.value(record).is_some()))
        .collect()
}

/// One point of the price vs quantity chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub price_each: f64,
    pub quantity: f64,
    pub sales: f64,
}

/// Fields a scatter point needs.
pub const SCATTER_FIELDS: [NumericField; 2] =
    [NumericField::QuantityOrdered, NumericField::PriceEach];

/// Builds chart points from records. Records lacking a numeric price or quantity are skipped.
pub fn scatter_points(records: &[&Record]) -> Vec<ScatterPoint> {
    records
        .iter()
        .filter_map(|record| {
            Some(ScatterPoint {
                price_each: record.price_each.value()?,
                quantity: record.quantity.value()?,
                sales: record.sales,
            })
        })
        .collect()
}
