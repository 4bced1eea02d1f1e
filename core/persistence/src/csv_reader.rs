//! FILENAME: core/persistence/src/csv_reader.rs

use crate::columns::ColumnMap;
use crate::{source_name, PersistenceError};
use engine::Dataset;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn load_csv(path: &Path) -> Result<Dataset, PersistenceError> {
    let file = File::open(path)?;
    read_csv(file, &source_name(path))
}

/// Reads a header-driven sales CSV from any reader.
pub fn read_csv<R: Read>(reader: R, source: &str) -> Result<Dataset, PersistenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(headers.iter())?;

    let mut records = Vec::new();
    let mut blank_rows = 0usize;

    for (index, result) in reader.records().enumerate() {
        let row = result?;

        if row.iter().all(|field| field.trim().is_empty()) {
            blank_rows += 1;
            continue;
        }

        let record = columns.build_record(index + 1, |col| {
            row.get(col).unwrap_or_default().to_string()
        })?;
        records.push(record);
    }

    log::info!(
        "loaded {} records from {} ({} blank rows skipped)",
        records.len(),
        source,
        blank_rows
    );

    Ok(Dataset::new(source, records))
}
