//! FILENAME: core/analytics-engine/src/filter.rs
//! Filter Engine - Produces the filtered view for a selection.

use crate::selection::FilterSelection;
use engine::Record;

/// Returns the records satisfying every predicate of `selection`, in input order.
pub fn apply<'a>(records: &'a [Record], selection: &FilterSelection) -> Vec<&'a Record> {
    if selection.selects_nothing() {
        return Vec::new();
    }

    records.iter().filter(|r| selection.matches(r)).collect()
}
