//! FILENAME: core/engine/src/record.rs
//! PURPOSE: Defines the strongly-typed sales transaction line.
//! CONTEXT: This file contains the `Record` struct and the `NumericCell`
//! wrapper. Numeric columns that the dashboard tolerates being malformed
//! (quantity, unit price) keep their raw text next to the value parsed once
//! at load time, so downstream code never re-parses strings.

use serde::{Deserialize, Serialize};
use crate::dimension::Dimension;

/// A numeric column value as read from the source, parsed once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericCell {
    /// The text exactly as it appeared in the source.
    pub raw: String,
    /// The parsed value, `None` when the text is not a finite number.
    value: Option<f64>,
}

impl NumericCell {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite());
        NumericCell { raw, value }
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_numeric(&self) -> bool {
        self.value.is_some()
    }

    /// Integral quantity for totals. Missing, negative or malformed values count as 0.
    pub fn as_quantity(&self) -> u64 {
        match self.value {
            Some(v) if v > 0.0 => v.trunc() as u64,
            _ => 0,
        }
    }
}

impl Default for NumericCell {
    fn default() -> Self {
        NumericCell {
            raw: String::new(),
            value: None,
        }
    }
}

/// One transaction line of the sales dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Order identifier. Shared by every line item of the same order.
    pub order_id: String,
    pub city: String,
    pub product: String,
    pub quantity: NumericCell,
    pub price_each: NumericCell,
    /// Sale amount of this line (quantity x unit price).
    pub sales: f64,
    /// Hour of the order, 1-24.
    pub hour: u8,
    pub month: String,
    /// Comma-separated list of every product bought in the same order.
    pub grouped: String,
}

impl Record {
    pub fn new(
        order_id: impl Into<String>,
        city: impl Into<String>,
        product: impl Into<String>,
    ) -> Self {
        Record {
            order_id: order_id.into(),
            city: city.into(),
            product: product.into(),
            quantity: NumericCell::default(),
            price_each: NumericCell::default(),
            sales: 0.0,
            hour: 1,
            month: String::new(),
            grouped: String::new(),
        }
    }

    pub fn with_quantity(mut self, raw: impl Into<String>) -> Self {
        self.quantity = NumericCell::parse(raw);
        self.derive_sales();
        self
    }

    pub fn with_price(mut self, raw: impl Into<String>) -> Self {
        self.price_each = NumericCell::parse(raw);
        self.derive_sales();
        self
    }

    /// Overrides the derived sale amount. Call after quantity and price.
    pub fn with_sales(mut self, sales: f64) -> Self {
        self.sales = sales;
        self
    }

    pub fn with_hour(mut self, hour: u8) -> Self {
        self.hour = hour;
        self
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = month.into();
        self
    }

    pub fn with_grouped(mut self, grouped: impl Into<String>) -> Self {
        self.grouped = grouped.into();
        self
    }

    /// Quantity x unit price, when both columns are numeric.
    pub fn computed_sales(&self) -> Option<f64> {
        Some(self.quantity.value()? * self.price_each.value()?)
    }

    fn derive_sales(&mut self) {
        if let Some(sales) = self.computed_sales() {
            self.sales = sales;
        }
    }

    /// Returns the value this record contributes to a grouping dimension.
    pub fn dimension_value(&self, dimension: Dimension) -> String {
        match dimension {
            Dimension::City => self.city.clone(),
            Dimension::Product => self.product.clone(),
            Dimension::Month => self.month.clone(),
            Dimension::Hour => self.hour.to_string(),
        }
    }
}
