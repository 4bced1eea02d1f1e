//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for dashboard integration tests.

#![allow(dead_code)]

use clap::Parser;
use dashboard_lib::{run_with_output, Args, DashboardError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness owning a scratch directory for data and config files.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Write the sales fixture as `sales.csv`.
    pub fn with_sales_fixture() -> Self {
        let harness = Self::new();
        harness.write_file("sales.csv", &SalesFixture::csv());
        harness
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Parse arguments as the binary would, with `data` as the data file.
    pub fn args(&self, data: &str, extra: &[&str]) -> Args {
        let data_path = self.path(data);
        let mut argv: Vec<String> = vec![
            "sales-dashboard".to_string(),
            data_path.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).expect("parse args")
    }

    /// Run the dashboard and capture its output.
    pub fn run(&self, data: &str, extra: &[&str]) -> Result<String, DashboardError> {
        let args = self.args(data, extra);
        let mut out = Vec::new();
        run_with_output(&args, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }
}

/// (order id, product, quantity, price, month, city, hour, grouped)
pub type FixtureRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u8,
    &'static str,
);

pub struct SalesFixture;

impl SalesFixture {
    pub fn headers() -> Vec<&'static str> {
        vec![
            "Order ID", "Product", "Quantity Ordered", "Price Each", "Order Date",
            "Purchase Address", "Month", "Sales", "City", "Hour", "Minute", "Grouped",
        ]
    }

    pub fn data() -> Vec<FixtureRow> {
        vec![
            ("176558", "USB Cable", "2", "11.95", "4", "Dallas (TX)", 8, "USB Cable,Phone Case"),
            ("176558", "Phone Case", "1", "9.99", "4", "Dallas (TX)", 8, "USB Cable,Phone Case"),
            ("176559", "USB Cable", "1", "11.95", "4", "Boston (MA)", 22, "USB Cable,Phone Case"),
            ("176560", "USB Cable", "3", "11.95", "5", "Boston (MA)", 14, "USB Cable,Charger"),
            ("176561", "iPhone", "1", "700", "5", "San Francisco (CA)", 19, "iPhone"),
            ("176562", "Charger", "1", "Price Each", "12", "San Francisco (CA)", 20, "Charger"),
        ]
    }

    pub fn csv() -> String {
        let mut text = Self::headers().join(",");
        text.push('\n');

        for (order_id, product, quantity, price, month, city, hour, grouped) in Self::data() {
            // Sales is quantity x price; the malformed price row carries a recorded amount
            let sales = match (quantity.parse::<f64>(), price.parse::<f64>()) {
                (Ok(q), Ok(p)) => format!("{}", q * p),
                _ => "19.99".to_string(),
            };
            text.push_str(&format!(
                "{},{},{},{},,,{},{},{},{},0,\"{}\"\n",
                order_id, product, quantity, price, month, sales, city, hour, grouped
            ));
        }

        text
    }
}
