//! FILENAME: core/persistence/src/columns.rs
//! PURPOSE: Maps source headers to record fields and converts raw rows.
//! CONTEXT: Shared by the CSV and XLSX readers. This is the single place
//! where text from the source file becomes a typed `Record`.

use crate::PersistenceError;
use engine::{NumericCell, Record};

pub const COL_ORDER_ID: &str = "Order ID";
pub const COL_PRODUCT: &str = "Product";
pub const COL_QUANTITY: &str = "Quantity Ordered";
pub const COL_PRICE_EACH: &str = "Price Each";
pub const COL_CITY: &str = "City";
pub const COL_HOUR: &str = "Hour";
pub const COL_MONTH: &str = "Month";
pub const COL_SALES: &str = "Sales";
pub const COL_GROUPED: &str = "Grouped";

/// Every header a sales file must carry. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    COL_ORDER_ID,
    COL_PRODUCT,
    COL_QUANTITY,
    COL_PRICE_EACH,
    COL_CITY,
    COL_HOUR,
    COL_MONTH,
    COL_SALES,
    COL_GROUPED,
];

/// Positions of the required columns within a source row.
#[derive(Debug, Clone)]
pub(crate) struct ColumnMap {
    order_id: usize,
    product: usize,
    quantity: usize,
    price_each: usize,
    city: usize,
    hour: usize,
    month: usize,
    sales: usize,
    grouped: usize,
}

impl ColumnMap {
    /// Resolves header positions. Matching trims whitespace and a leading BOM.
    pub fn from_headers<I, S>(headers: I) -> Result<Self, PersistenceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = headers
            .into_iter()
            .map(|h| h.as_ref().trim_start_matches('\u{FEFF}').trim().to_string())
            .collect();

        let find = |column: &str| -> Result<usize, PersistenceError> {
            names
                .iter()
                .position(|name| name == column)
                .ok_or_else(|| PersistenceError::MissingColumn(column.to_string()))
        };

        Ok(ColumnMap {
            order_id: find(COL_ORDER_ID)?,
            product: find(COL_PRODUCT)?,
            quantity: find(COL_QUANTITY)?,
            price_each: find(COL_PRICE_EACH)?,
            city: find(COL_CITY)?,
            hour: find(COL_HOUR)?,
            month: find(COL_MONTH)?,
            sales: find(COL_SALES)?,
            grouped: find(COL_GROUPED)?,
        })
    }

    /// Builds a record from one data row. `row` is 1-based and only used in errors.
    /// Missing trailing cells read as empty text.
    pub fn build_record<F>(&self, row: usize, cell: F) -> Result<Record, PersistenceError>
    where
        F: Fn(usize) -> String,
    {
        let hour_text = cell(self.hour);
        let hour = parse_hour(&hour_text).ok_or_else(|| PersistenceError::InvalidValue {
            row,
            column: COL_HOUR.to_string(),
            value: hour_text.clone(),
        })?;

        let record = Record::new(cell(self.order_id), cell(self.city), cell(self.product))
            .with_quantity(cell(self.quantity))
            .with_price(cell(self.price_each))
            .with_hour(hour)
            .with_month(cell(self.month))
            .with_grouped(cell(self.grouped));

        // The Sales column wins; fall back to quantity x price when it is blank or malformed.
        let sales_text = cell(self.sales);
        let sales = NumericCell::parse(sales_text.as_str())
            .value()
            .or_else(|| record.computed_sales())
            .ok_or_else(|| PersistenceError::InvalidValue {
                row,
                column: COL_SALES.to_string(),
                value: sales_text.clone(),
            })?;

        Ok(record.with_sales(sales))
    }
}

/// Accepts "8" as well as spreadsheet-style "8.0".
fn parse_hour(text: &str) -> Option<u8> {
    let trimmed = text.trim();
    if let Ok(hour) = trimmed.parse::<u8>() {
        return Some(hour);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}
