//! FILENAME: core/analytics-engine/src/lib.rs
//! Sales analytics subsystem.
//!
//! Every function here is a pure computation over a borrowed `Dataset`:
//! nothing is cached between calls and a new filter selection simply means
//! running the pipeline again.
//!
//! Layers:
//! - `selection`: What the user asked for (cities, products, hours, months)
//! - `filter`: Which records satisfy the selection
//! - `aggregate`: Totals and grouped sums over the filtered records
//! - `pairs`: Products most often bought together
//! - `coerce`: Numeric cleaning for chart consumers
//! - `dashboard`: Everything above assembled into one renderable view

pub mod aggregate;
pub mod coerce;
pub mod dashboard;
pub mod filter;
pub mod pairs;
pub mod selection;

pub use aggregate::{
    group_by, group_by_ordered, summarize, AggregateSummary, GroupOrder, GroupRow,
    GroupedAggregate,
};
pub use coerce::{coerce_numeric, scatter_points, NumericField, ScatterPoint, SCATTER_FIELDS};
pub use dashboard::{build_dashboard, DashboardOptions, DashboardView};
pub use filter::apply as apply_filter;
pub use pairs::{
    split_grouped, top_pairs, PairCounter, PairRow, ProductPair, DEFAULT_TOP_PAIRS,
    GROUPED_DELIMITER, PAIR_SEPARATOR,
};
pub use selection::{FilterSelection, HourRange, SelectionError, MAX_HOUR, MIN_HOUR};
