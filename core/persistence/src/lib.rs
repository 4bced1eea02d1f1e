//! FILENAME: core/persistence/src/lib.rs
//! Sales Data Loader
//!
//! Reads sales datasets from CSV and spreadsheet files into a typed
//! `Dataset`. All text-to-type conversion happens here; a file missing a
//! required column or carrying an unreadable hour fails the load.

mod columns;
mod csv_reader;
mod error;
mod xlsx_reader;

pub use columns::REQUIRED_COLUMNS;
pub use csv_reader::{load_csv, read_csv};
pub use error::PersistenceError;
pub use xlsx_reader::load_xlsx;

use engine::Dataset;
use std::path::Path;

/// Loads a dataset, choosing the reader from the file extension.
pub fn load_dataset(path: &Path) -> Result<Dataset, PersistenceError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" | "txt" => load_csv(path),
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_xlsx(path),
        other => Err(PersistenceError::UnsupportedFormat(if other.is_empty() {
            path.display().to_string()
        } else {
            other.to_string()
        })),
    }
}

/// File name used to label a dataset.
pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
