//! FILENAME: app/dashboard/src/config.rs
//! PURPOSE: Dashboard configuration (filter selection and display options).
//! CONTEXT: Loaded from an optional JSON file and overridden by command-line
//! flags. A dimension left unset selects every value present in the
//! dataset; a dimension set to an empty list selects nothing.

use crate::cli::Args;
use crate::DashboardError;
use analytics_engine::{DashboardOptions, FilterSelection, HourRange};
use engine::{Dataset, Dimension};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    pub cities: Option<Vec<String>>,
    pub products: Option<Vec<String>>,
    pub months: Option<Vec<String>>,
    /// Inclusive `[lo, hi]`.
    pub hours: Option<(u8, u8)>,
    pub top_pairs: Option<usize>,
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let text = std::fs::read_to_string(path).map_err(|source| DashboardError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, DashboardError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Applies command-line overrides. Repeatable flags replace the file's list.
    pub fn merge_args(mut self, args: &Args) -> Self {
        if !args.cities.is_empty() {
            self.cities = Some(args.cities.clone());
        }
        if !args.products.is_empty() {
            self.products = Some(args.products.clone());
        }
        if !args.months.is_empty() {
            self.months = Some(args.months.clone());
        }
        if let Some(hours) = args.hours {
            self.hours = Some((hours.lo(), hours.hi()));
        }
        if let Some(top) = args.top {
            self.top_pairs = Some(top);
        }
        self
    }

    /// Resolves the selection against a loaded dataset.
    pub fn selection(&self, dataset: &Dataset) -> Result<FilterSelection, DashboardError> {
        let hours = match self.hours {
            Some((lo, hi)) => HourRange::new(lo, hi)?,
            None => HourRange::FULL,
        };

        let pick = |configured: &Option<Vec<String>>, dimension: Dimension| match configured {
            Some(values) => values.clone(),
            None => dataset.unique_values(dimension),
        };

        Ok(FilterSelection::new(
            pick(&self.cities, Dimension::City),
            pick(&self.products, Dimension::Product),
            hours,
            pick(&self.months, Dimension::Month),
        ))
    }

    pub fn options(&self) -> DashboardOptions {
        let defaults = DashboardOptions::default();
        DashboardOptions {
            top_pairs: self.top_pairs.unwrap_or(defaults.top_pairs),
        }
    }
}
