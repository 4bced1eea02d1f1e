// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::columns::{ColumnMap, COL_ORDER_ID};
use crate::{source_name, PersistenceError};
use calamine::{open_workbook_auto, Data, Reader};
use engine::Dataset;
use std::path::Path;

/// Loads the first worksheet of a spreadsheet workbook.
pub fn load_xlsx(path: &Path) -> Result<Dataset, PersistenceError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(PersistenceError::EmptyWorkbook)?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    let header_row = rows
        .next()
        .ok_or_else(|| PersistenceError::MissingColumn(COL_ORDER_ID.to_string()))?;
    let columns = ColumnMap::from_headers(header_row.iter().map(cell_text))?;

    let mut records = Vec::new();

    for (index, row) in rows.enumerate() {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let record = columns.build_record(index + 1, |col| {
            row.get(col).map(cell_text).unwrap_or_default()
        })?;
        records.push(record);
    }

    log::info!(
        "loaded {} records from sheet '{}' of {}",
        records.len(),
        sheet_name,
        path.display()
    );

    Ok(Dataset::new(source_name(path), records))
}

/// Text form of a spreadsheet cell as the record builder expects it.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            // Whole numbers (order ids, hours) must not gain a ".0"
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("{:?}", e),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::REQUIRED_COLUMNS;
    use rust_xlsxwriter::Workbook;

    /// Writes a small sales sheet: two data rows around a blank row.
    fn write_sales_workbook(path: &Path) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        // Order ID, Product, Quantity Ordered, Price Each, City, Hour, Month, Sales, Grouped
        for (col, header) in REQUIRED_COLUMNS.iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }

        sheet.write_number(1, 0, 176558.0).unwrap();
        sheet.write_string(1, 1, "USB-C Charging Cable").unwrap();
        sheet.write_number(1, 2, 2.0).unwrap();
        sheet.write_number(1, 3, 11.95).unwrap();
        sheet.write_string(1, 4, "Dallas (TX)").unwrap();
        sheet.write_number(1, 5, 8.0).unwrap();
        sheet.write_number(1, 6, 4.0).unwrap();
        sheet.write_number(1, 7, 23.9).unwrap();
        sheet.write_string(1, 8, "USB-C Charging Cable,Wired Headphones").unwrap();

        // Row 2 stays empty; Sales of row 3 is blank and derived on load
        sheet.write_number(3, 0, 176559.0).unwrap();
        sheet.write_string(3, 1, "Wired Headphones").unwrap();
        sheet.write_number(3, 2, 1.0).unwrap();
        sheet.write_number(3, 3, 11.99).unwrap();
        sheet.write_string(3, 4, "Boston (MA)").unwrap();
        sheet.write_number(3, 5, 22.0).unwrap();
        sheet.write_number(3, 6, 5.0).unwrap();
        sheet.write_string(3, 8, "Wired Headphones").unwrap();

        workbook.save(path).unwrap();
    }

    #[test]
    fn test_load_xlsx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.xlsx");
        write_sales_workbook(&path);

        let dataset = load_xlsx(&path).unwrap();

        assert_eq!(dataset.source, "sales.xlsx");
        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.order_id, "176558");
        assert_eq!(first.city, "Dallas (TX)");
        assert_eq!(first.hour, 8);
        assert_eq!(first.month, "4");
        assert_eq!(first.quantity.raw, "2");
        assert_eq!(first.price_each.value(), Some(11.95));
        assert_eq!(first.sales, 23.9);
        assert_eq!(first.grouped, "USB-C Charging Cable,Wired Headphones");

        let second = &dataset.records()[1];
        assert_eq!(second.order_id, "176559");
        assert_eq!(second.hour, 22);
        assert!((second.sales - 11.99).abs() < 1e-9);
    }

    #[test]
    fn test_load_dataset_dispatches_xlsx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Sales.XLSX");
        write_sales_workbook(&path);

        assert_eq!(crate::load_dataset(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Float(176558.0)), "176558");
        assert_eq!(cell_text(&Data::Float(11.95)), "11.95");
        assert_eq!(cell_text(&Data::Int(21)), "21");
        assert_eq!(cell_text(&Data::String("Boston (MA)".to_string())), "Boston (MA)");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_load_xlsx_missing_file() {
        let result = load_xlsx(Path::new("does-not-exist.xlsx"));
        assert!(result.is_err());
    }
}
