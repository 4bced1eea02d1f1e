//! FILENAME: core/analytics-engine/src/selection.rs
//! Filter Selection - The user's constraint set.
//!
//! A selection is an immutable snapshot of user intent. An empty set for any
//! dimension selects nothing: there is no implicit "select all".
//! `FilterSelection::all` builds the dashboard default explicitly.

use engine::{Dataset, Dimension, Record};
use rustc_hash::FxHashSet;
use thiserror::Error;

pub const MIN_HOUR: u8 = 1;
pub const MAX_HOUR: u8 = 24;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error(
        "Invalid hour range {lo}-{hi}: expected {min} <= lo <= hi <= {max}",
        min = MIN_HOUR,
        max = MAX_HOUR
    )]
    InvalidHourRange { lo: u8, hi: u8 },
}

// ============================================================================
// HOUR RANGE
// ============================================================================

/// Inclusive hour range with `1 <= lo <= hi <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourRange {
    lo: u8,
    hi: u8,
}

impl HourRange {
    /// The whole day.
    pub const FULL: HourRange = HourRange { lo: MIN_HOUR, hi: MAX_HOUR };

    pub fn new(lo: u8, hi: u8) -> Result<Self, SelectionError> {
        if lo < MIN_HOUR || hi > MAX_HOUR || lo > hi {
            return Err(SelectionError::InvalidHourRange { lo, hi });
        }
        Ok(HourRange { lo, hi })
    }

    pub fn lo(&self) -> u8 {
        self.lo
    }

    pub fn hi(&self) -> u8 {
        self.hi
    }

    pub fn contains(&self, hour: u8) -> bool {
        self.lo <= hour && hour <= self.hi
    }
}

impl Default for HourRange {
    fn default() -> Self {
        HourRange::FULL
    }
}

// ============================================================================
// FILTER SELECTION
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub cities: FxHashSet<String>,
    pub products: FxHashSet<String>,
    pub hours: HourRange,
    pub months: FxHashSet<String>,
}

impl FilterSelection {
    pub fn new<C, P, M>(cities: C, products: P, hours: HourRange, months: M) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        FilterSelection {
            cities: cities.into_iter().map(Into::into).collect(),
            products: products.into_iter().map(Into::into).collect(),
            hours,
            months: months.into_iter().map(Into::into).collect(),
        }
    }

    /// Every city, product and month present in the dataset, over the whole day.
    pub fn all(dataset: &Dataset) -> Self {
        FilterSelection::new(
            dataset.unique_values(Dimension::City),
            dataset.unique_values(Dimension::Product),
            HourRange::FULL,
            dataset.unique_values(Dimension::Month),
        )
    }

    pub fn with_cities<I>(mut self, cities: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.cities = cities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_products<I>(mut self, products: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.products = products.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_months<I>(mut self, months: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.months = months.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hours(mut self, hours: HourRange) -> Self {
        self.hours = hours;
        self
    }

    /// True when some dimension selects nothing, so no record can match.
    pub fn selects_nothing(&self) -> bool {
        self.cities.is_empty() || self.products.is_empty() || self.months.is_empty()
    }

    /// Conjunction of all four predicates.
    pub fn matches(&self, record: &Record) -> bool {
        self.cities.contains(record.city.as_str())
            && self.products.contains(record.product.as_str())
            && self.hours.contains(record.hour)
            && self.months.contains(record.month.as_str())
    }
}
