//! FILENAME: core/engine/src/dimension.rs
//! PURPOSE: The categorical axes a sales dataset can be filtered and grouped by.

use serde::{Deserialize, Serialize};

/// A grouping dimension of the sales dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Month,
    City,
    Product,
    Hour,
}

impl Dimension {
    /// Column header of the dimension in the source file.
    pub fn column_name(&self) -> &'static str {
        match self {
            Dimension::Month => "Month",
            Dimension::City => "City",
            Dimension::Product => "Product",
            Dimension::Hour => "Hour",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Calendar position (1-12) of a month label.
/// Accepts month numbers, full English names and three-letter abbreviations.
pub fn month_ordinal(label: &str) -> Option<u32> {
    let trimmed = label.trim();

    if let Ok(n) = trimmed.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }

    let lower = trimmed.to_ascii_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| *name == lower || (lower.len() == 3 && name.starts_with(&lower)))
        .map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_ordinal_numbers() {
        assert_eq!(month_ordinal("1"), Some(1));
        assert_eq!(month_ordinal(" 12 "), Some(12));
        assert_eq!(month_ordinal("13"), None);
        assert_eq!(month_ordinal("0"), None);
    }

    #[test]
    fn test_month_ordinal_names() {
        assert_eq!(month_ordinal("January"), Some(1));
        assert_eq!(month_ordinal("sep"), Some(9));
        assert_eq!(month_ordinal("DECEMBER"), Some(12));
        assert_eq!(month_ordinal("Ma"), None);
        assert_eq!(month_ordinal("Q1"), None);
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(Dimension::Product.to_string(), "Product");
        assert_eq!(Dimension::Hour.column_name(), "Hour");
    }
}
