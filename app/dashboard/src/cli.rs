//! FILENAME: app/dashboard/src/cli.rs
//! Command-line arguments of `sales-dashboard`.

use analytics_engine::HourRange;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// sales-dashboard - Descriptive analytics over a sales dataset
#[derive(Parser, Debug, Clone)]
#[command(name = "sales-dashboard")]
#[command(
    author,
    version,
    about = "Sales analysis dashboard: totals, trends and products bought together"
)]
pub struct Args {
    /// Sales data file (.csv or .xlsx)
    pub data: PathBuf,

    /// JSON file with the filter selection
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only include this city (repeatable)
    #[arg(long = "city")]
    pub cities: Vec<String>,

    /// Only include this product (repeatable)
    #[arg(long = "product")]
    pub products: Vec<String>,

    /// Only include this month (repeatable)
    #[arg(long = "month")]
    pub months: Vec<String>,

    /// Hour range, inclusive, e.g. 9-17
    #[arg(long, value_parser = parse_hour_range)]
    pub hours: Option<HourRange>,

    /// Number of product pairs to rank
    #[arg(long)]
    pub top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also write log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log debug details of every computation
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for the rendered dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    Text,
    /// The full dashboard view as JSON
    Json,
}

/// Parses "LO-HI" (or a single hour "H") into an hour range.
pub fn parse_hour_range(value: &str) -> Result<HourRange, String> {
    let (lo, hi) = match value.split_once('-') {
        Some((lo, hi)) => (lo, hi),
        None => (value, value),
    };

    let lo: u8 = lo
        .trim()
        .parse()
        .map_err(|_| format!("invalid hour '{}'", lo.trim()))?;
    let hi: u8 = hi
        .trim()
        .parse()
        .map_err(|_| format!("invalid hour '{}'", hi.trim()))?;

    HourRange::new(lo, hi).map_err(|e| e.to_string())
}
