//! FILENAME: core/analytics-engine/src/dashboard.rs
//! Dashboard View - Renderable output for the presentation layer.
//!
//! Runs the whole pipeline for one selection:
//! filter -> summary, grouped sums, pair table, scatter points.
//! The view owns its data so it can be serialized or handed to a renderer
//! after the dataset borrow ends.

use crate::aggregate::{group_by, summarize, AggregateSummary, GroupedAggregate};
use crate::coerce::{coerce_numeric, scatter_points, ScatterPoint, SCATTER_FIELDS};
use crate::filter;
use crate::pairs::{top_pairs, PairRow, DEFAULT_TOP_PAIRS};
use crate::selection::FilterSelection;
use engine::{Dataset, Dimension};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOptions {
    /// How many product pairs to rank.
    pub top_pairs: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        DashboardOptions {
            top_pairs: DEFAULT_TOP_PAIRS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub source: String,
    /// Records in the dataset.
    pub total_records: usize,
    /// Records passing the selection.
    pub record_count: usize,
    pub summary: AggregateSummary,
    pub by_month: GroupedAggregate,
    pub by_city: GroupedAggregate,
    pub by_product: GroupedAggregate,
    pub by_hour: GroupedAggregate,
    pub scatter: Vec<ScatterPoint>,
    /// Filtered records left out of the scatter for non-numeric price or quantity.
    pub scatter_excluded: usize,
    pub top_pairs: Vec<PairRow>,
}

pub fn build_dashboard(
    dataset: &Dataset,
    selection: &FilterSelection,
    options: &DashboardOptions,
) -> DashboardView {
    let filtered = filter::apply(dataset.records(), selection);

    log::debug!(
        "selection kept {} of {} records (cities={}, products={}, months={}, hours={}-{})",
        filtered.len(),
        dataset.len(),
        selection.cities.len(),
        selection.products.len(),
        selection.months.len(),
        selection.hours.lo(),
        selection.hours.hi(),
    );

    let cleaned = coerce_numeric(&filtered, &SCATTER_FIELDS);
    let scatter_excluded = filtered.len() - cleaned.len();
    if scatter_excluded > 0 {
        log::debug!("{} records have non-numeric price or quantity", scatter_excluded);
    }

    DashboardView {
        source: dataset.source.clone(),
        total_records: dataset.len(),
        record_count: filtered.len(),
        summary: summarize(&filtered),
        by_month: group_by(&filtered, Dimension::Month),
        by_city: group_by(&filtered, Dimension::City),
        by_product: group_by(&filtered, Dimension::Product),
        by_hour: group_by(&filtered, Dimension::Hour),
        scatter: scatter_points(&cleaned),
        scatter_excluded,
        top_pairs: top_pairs(&filtered, options.top_pairs),
    }
}
