//! FILENAME: app/dashboard/src/render.rs
//! PURPOSE: Renders a `DashboardView` as text tables or JSON.
//! CONTEXT: Section order follows the dashboard page: summary, monthly and
//! city trends, product analysis, hourly analysis, price vs quantity, and
//! the most common product pairs.

use analytics_engine::{DashboardView, GroupedAggregate, ScatterPoint};
use engine::{format_number, presets, NumberFormat};
use std::io::{self, Write};

const TITLE: &str = "Sales Analysis Dashboard";

pub fn render_json<W: Write>(view: &DashboardView, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, view)?;
    writeln!(out)
}

pub fn render_text<W: Write>(view: &DashboardView, out: &mut W) -> io::Result<()> {
    let currency = presets::currency_usd(2);
    let count = presets::count();

    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;
    writeln!(
        out,
        "Source: {} ({} of {} records selected)",
        view.source,
        format_number(view.record_count as f64, &count),
        format_number(view.total_records as f64, &count),
    )?;

    // Sales summary
    section(out, "Sales Summary")?;
    let summary = &view.summary;
    write_table(
        out,
        &["Metric", "Value"],
        vec![
            vec![
                "Total Sales (USD)".to_string(),
                format_number(summary.total_sales, &currency),
            ],
            vec![
                "Total Quantity Sold".to_string(),
                format_number(summary.total_quantity as f64, &count),
            ],
            vec![
                "Total Number of Orders".to_string(),
                format_number(summary.total_orders as f64, &count),
            ],
            vec![
                "Avg Sales per Order (USD)".to_string(),
                format_number(summary.average_sales_per_order, &currency),
            ],
        ],
    )?;

    section(out, "Monthly Sales")?;
    write_grouped(out, &view.by_month, "Month", &currency, &count)?;

    section(out, "Total Sales by City")?;
    write_grouped(out, &view.by_city, "City", &currency, &count)?;

    section(out, "Quantity Ordered by Product")?;
    write_grouped(out, &view.by_product, "Product", &currency, &count)?;

    section(out, "Number of Orders by Hour")?;
    write_grouped(out, &view.by_hour, "Hour", &currency, &count)?;

    section(out, "Price vs Quantity Ordered")?;
    write_scatter_summary(out, &view.scatter, view.scatter_excluded, &currency, &count)?;

    section(out, "Most Common Product Pairs")?;
    if view.top_pairs.is_empty() {
        writeln!(out, "(no product pairs)")?;
    } else {
        let rows = view
            .top_pairs
            .iter()
            .map(|row| {
                vec![
                    row.rank.to_string(),
                    row.label.clone(),
                    format_number(row.count as f64, &count),
                ]
            })
            .collect();
        write_table(out, &["#", "Product Pair", "Count"], rows)?;
    }

    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.len()))
}

fn write_grouped<W: Write>(
    out: &mut W,
    grouped: &GroupedAggregate,
    key_header: &str,
    currency: &NumberFormat,
    count: &NumberFormat,
) -> io::Result<()> {
    if grouped.is_empty() {
        return writeln!(out, "(no data)");
    }

    let rows = grouped
        .rows
        .iter()
        .map(|row| {
            vec![
                row.key.clone(),
                format_number(row.sales, currency),
                format_number(row.quantity as f64, count),
            ]
        })
        .collect();

    write_table(out, &[key_header, "Sales (USD)", "Quantity Ordered"], rows)
}

fn write_scatter_summary<W: Write>(
    out: &mut W,
    points: &[ScatterPoint],
    excluded: usize,
    currency: &NumberFormat,
    count: &NumberFormat,
) -> io::Result<()> {
    writeln!(
        out,
        "Points: {} ({} excluded for non-numeric price or quantity)",
        format_number(points.len() as f64, count),
        format_number(excluded as f64, count),
    )?;

    let Some((min_price, max_price)) = bounds(points.iter().map(|p| p.price_each)) else {
        return Ok(());
    };
    let (min_qty, max_qty) = bounds(points.iter().map(|p| p.quantity)).unwrap_or((0.0, 0.0));

    writeln!(
        out,
        "Price range: {} - {}",
        format_number(min_price, currency),
        format_number(max_price, currency),
    )?;
    writeln!(
        out,
        "Quantity range: {} - {}",
        format_number(min_qty, count),
        format_number(max_qty, count),
    )
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Writes a plain table: first column left-aligned, the rest right-aligned.
fn write_table<W: Write>(out: &mut W, headers: &[&str], rows: Vec<Vec<String>>) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_row(out, &header_cells, &widths)?;

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule, &widths)?;

    for row in &rows {
        write_row(out, row, &widths)?;
    }

    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == 0 {
            line.push_str(&format!("{:<width$}", cell, width = *width));
        } else {
            line.push_str(&format!("  {:>width$}", cell, width = *width));
        }
    }
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_engine::{build_dashboard, DashboardOptions, FilterSelection};
    use engine::{Dataset, Record};

    fn create_test_view(selection: impl Fn(&Dataset) -> FilterSelection) -> DashboardView {
        let dataset = Dataset::new(
            "fixture.csv",
            vec![
                Record::new("176558", "Dallas (TX)", "USB-C Charging Cable")
                    .with_quantity("2")
                    .with_price("11.95")
                    .with_hour(8)
                    .with_month("4")
                    .with_grouped("USB-C Charging Cable,Wired Headphones"),
                Record::new("176558", "Dallas (TX)", "Wired Headphones")
                    .with_quantity("1")
                    .with_price("11.99")
                    .with_hour(8)
                    .with_month("4")
                    .with_grouped("USB-C Charging Cable,Wired Headphones"),
                Record::new("176559", "Boston (MA)", "Macbook Pro Laptop")
                    .with_quantity("1")
                    .with_price("1700")
                    .with_hour(22)
                    .with_month("5")
                    .with_grouped("Macbook Pro Laptop"),
            ],
        );
        let selection = selection(&dataset);
        build_dashboard(&dataset, &selection, &DashboardOptions::default())
    }

    fn render(view: &DashboardView) -> String {
        let mut out = Vec::new();
        render_text(view, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_text_sections() {
        let text = render(&create_test_view(FilterSelection::all));

        assert!(text.starts_with("Sales Analysis Dashboard\n"));
        assert!(text.contains("Source: fixture.csv (3 of 3 records selected)"));
        assert!(text.contains("$1,735.89"));
        assert!(text.contains("Total Number of Orders"));
        assert!(text.contains("Quantity Ordered by Product"));
        assert!(text.contains("USB-C Charging Cable & Wired Headphones"));
        assert!(text.contains("Price range: $11.95 - $1,700.00"));
    }

    #[test]
    fn test_render_text_empty_selection() {
        let view = create_test_view(|d| FilterSelection::all(d).with_cities(Vec::<String>::new()));
        let text = render(&view);

        assert!(text.contains("(0 of 3 records selected)"));
        assert!(text.contains("$0.00"));
        assert!(text.contains("(no data)"));
        assert!(text.contains("(no product pairs)"));
    }

    #[test]
    fn test_render_json() {
        let view = create_test_view(FilterSelection::all);
        let mut out = Vec::new();
        render_json(&view, &mut out).unwrap();

        let parsed: DashboardView = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.record_count, view.record_count);
        assert_eq!(parsed.top_pairs, view.top_pairs);
    }

    #[test]
    fn test_write_table_alignment() {
        let mut out = Vec::new();
        write_table(
            &mut out,
            &["City", "Sales"],
            vec![vec!["Austin (TX)".to_string(), "$5.00".to_string()]],
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "City         Sales");
        assert_eq!(lines[1], "-----------  -----");
        assert_eq!(lines[2], "Austin (TX)  $5.00");
    }
}
