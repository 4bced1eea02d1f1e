//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the sales data model.
//! CONTEXT: Re-exports public types and modules for use by the loader,
//! the analytics engine and the dashboard application.

pub mod dataset;
pub mod dimension;
pub mod number_format;
pub mod record;

// Re-export commonly used types at the crate root
pub use dataset::Dataset;
pub use dimension::{month_ordinal, Dimension};
pub use number_format::{format_number, presets, NumberFormat};
pub use record::{NumericCell, Record};
