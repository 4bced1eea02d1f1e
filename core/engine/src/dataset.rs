//! FILENAME: core/engine/src/dataset.rs
//! PURPOSE: The in-memory sales table produced by the loader.
//! CONTEXT: A `Dataset` is immutable after load. Every derived view borrows
//! from it, so independent computations can share one instance by reference.

use std::collections::HashSet;
use crate::dimension::Dimension;
use crate::record::Record;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Where the records came from (file name or fixture label).
    pub source: String,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, records: Vec<Record>) -> Self {
        Dataset {
            source: source.into(),
            records,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values of a dimension, in the order they first appear.
    pub fn unique_values(&self, dimension: Dimension) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();

        for record in &self.records {
            let value = record.dimension_value(dimension);
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }

        values
    }
}
