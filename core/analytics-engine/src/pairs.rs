//! FILENAME: core/analytics-engine/src/pairs.rs
//! Pair-Frequency Counter - Products most often bought together.
//!
//! Algorithm:
//! 1. Split each record's grouped field into product tokens
//! 2. Enumerate every unordered pair of token positions (i < j)
//! 3. Tally each pair under a canonical key, so (A, B) and (B, A) share a count
//! 4. Rank by count; equal counts keep the order in which pairs were first seen
//!
//! Tokens are neither trimmed nor deduplicated. A product listed twice in one
//! order takes part in pair generation once per position, which can yield a
//! pair of a product with itself.
//!
//! The counter borrows its keys from the records, so a full pass allocates
//! only for the hash table and the tally vector.

use std::fmt;
use engine::Record;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Separator between product names in the grouped field.
pub const GROUPED_DELIMITER: char = ',';

/// Number of pairs the dashboard shows.
pub const DEFAULT_TOP_PAIRS: usize = 5;

/// Separator used when rendering a pair as a single label.
pub const PAIR_SEPARATOR: &str = " & ";

/// Orders rarely hold more than a handful of products.
type Tokens<'a> = SmallVec<[&'a str; 8]>;

/// Splits a grouped field into product tokens. An empty field has no tokens.
pub fn split_grouped(grouped: &str) -> Tokens<'_> {
    if grouped.is_empty() {
        return Tokens::new();
    }
    grouped.split(GROUPED_DELIMITER).collect()
}

// ============================================================================
// OUTPUT TYPES
// ============================================================================

/// Two products bought together, in the orientation they were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductPair {
    pub first: String,
    pub second: String,
}

impl ProductPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        ProductPair {
            first: first.into(),
            second: second.into(),
        }
    }

    /// "A & B"
    pub fn label(&self) -> String {
        format!("{}{}{}", self.first, PAIR_SEPARATOR, self.second)
    }

    /// True if both pairs name the same two products, in either orientation.
    pub fn same_products(&self, other: &ProductPair) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl fmt::Display for ProductPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, PAIR_SEPARATOR, self.second)
    }
}

/// One line of the ranked pair table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRow {
    /// 1-based display rank.
    pub rank: usize,
    pub pair: ProductPair,
    pub label: String,
    pub count: u64,
}

// ============================================================================
// COUNTER
// ============================================================================

#[derive(Debug, Clone)]
struct PairTally<'a> {
    first: &'a str,
    second: &'a str,
    count: u64,
}

/// Tally of co-purchased product pairs. Built fresh for each computation.
#[derive(Debug, Clone, Default)]
pub struct PairCounter<'a> {
    /// Canonical (sorted) pair -> slot in `tallies`.
    index: FxHashMap<(&'a str, &'a str), usize>,
    /// Tallies in first-seen order.
    tallies: Vec<PairTally<'a>>,
}

impl<'a> PairCounter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every pair of positions in one grouped field.
    pub fn add_row(&mut self, grouped: &'a str) {
        let tokens = split_grouped(grouped);
        self.add_tokens(&tokens);
    }

    /// Counts every pair of positions in an already split token list.
    pub fn add_tokens(&mut self, tokens: &[&'a str]) {
        for (i, &first) in tokens.iter().enumerate() {
            for &second in &tokens[i + 1..] {
                self.increment(first, second);
            }
        }
    }

    fn increment(&mut self, first: &'a str, second: &'a str) {
        let key = canonical(first, second);
        match self.index.get(&key) {
            Some(&slot) => self.tallies[slot].count += 1,
            None => {
                self.index.insert(key, self.tallies.len());
                self.tallies.push(PairTally {
                    first,
                    second,
                    count: 1,
                });
            }
        }
    }

    /// Number of distinct pairs seen.
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Count for a pair, in either orientation.
    pub fn count(&self, a: &str, b: &str) -> u64 {
        self.index
            .get(&canonical(a, b))
            .map(|&slot| self.tallies[slot].count)
            .unwrap_or(0)
    }

    /// The `k` most frequent pairs, ranked from 1. Ties keep first-seen order.
    pub fn into_top(self, k: usize) -> Vec<PairRow> {
        if k == 0 {
            return Vec::new();
        }

        let mut tallies = self.tallies;
        // Stable: equal counts stay in first-seen order
        tallies.sort_by(|a, b| b.count.cmp(&a.count));
        tallies.truncate(k);

        tallies
            .into_iter()
            .enumerate()
            .map(|(i, tally)| {
                let pair = ProductPair::new(tally.first, tally.second);
                PairRow {
                    rank: i + 1,
                    label: pair.label(),
                    pair,
                    count: tally.count,
                }
            })
            .collect()
    }
}

fn canonical<'s>(a: &'s str, b: &'s str) -> (&'s str, &'s str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Ranks the `k` pairs of products most often bought together.
pub fn top_pairs(records: &[&Record], k: usize) -> Vec<PairRow> {
    let mut counter = PairCounter::new();
    for record in records {
        counter.add_row(&record.grouped);
    }

    log::debug!(
        "counted {} distinct product pairs over {} records",
        counter.len(),
        records.len()
    );

    counter.into_top(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, grouped: &str) -> Record {
        Record::new(id, "Austin (TX)", "iPhone").with_grouped(grouped)
    }

    fn refs(records: &[Record]) -> Vec<&Record> {
        records.iter().collect()
    }

    #[test]
    fn test_split_grouped() {
        assert!(split_grouped("").is_empty());
        assert_eq!(split_grouped("iPhone").as_slice(), &["iPhone"]);
        assert_eq!(
            split_grouped("iPhone,Lightning Charging Cable").as_slice(),
            &["iPhone", "Lightning Charging Cable"]
        );
    }

    #[test]
    fn test_single_token_contributes_nothing() {
        let mut counter = PairCounter::new();
        counter.add_row("X");
        counter.add_row("");
        assert!(counter.is_empty());
    }

    #[test]
    fn test_three_tokens_contribute_three_pairs() {
        let mut counter = PairCounter::new();
        counter.add_row("X,Y,Z");

        assert_eq!(counter.len(), 3);
        assert_eq!(counter.count("X", "Y"), 1);
        assert_eq!(counter.count("X", "Z"), 1);
        assert_eq!(counter.count("Y", "Z"), 1);
    }

    #[test]
    fn test_pairs_are_symmetric() {
        let mut counter = PairCounter::new();
        counter.add_row("A,B");
        counter.add_row("B,A");

        assert_eq!(counter.len(), 1);
        assert_eq!(counter.count("A", "B"), 2);
        assert_eq!(counter.count("B", "A"), 2);

        let top = counter.into_top(5);
        assert_eq!(top.len(), 1);
        // First-seen orientation is kept for display
        assert_eq!(top[0].label, "A & B");
    }

    #[test]
    fn test_duplicate_tokens_are_not_deduplicated() {
        let mut counter = PairCounter::new();
        counter.add_row("A,A,B");

        assert_eq!(counter.count("A", "A"), 1);
        assert_eq!(counter.count("A", "B"), 2);
    }

    #[test]
    fn test_top_pairs_scenario() {
        let records = vec![
            order("1", "USB Cable,Phone Case"),
            order("2", "USB Cable,Phone Case"),
            order("3", "USB Cable,Charger"),
        ];

        let top = top_pairs(&refs(&records), 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[0].pair, ProductPair::new("USB Cable", "Phone Case"));
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].rank, 2);
        assert_eq!(top[1].label, "USB Cable & Charger");
        assert_eq!(top[1].count, 1);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let records = vec![
            order("1", "Zeta,Alpha"),
            order("2", "Mid,Beta"),
            order("3", "Alpha,Beta"),
        ];

        let top = top_pairs(&refs(&records), 3);
        let labels: Vec<&str> = top.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["Zeta & Alpha", "Mid & Beta", "Alpha & Beta"]);
    }

    #[test]
    fn test_top_zero_is_empty() {
        let records = vec![order("1", "A,B")];
        assert!(top_pairs(&refs(&records), 0).is_empty());
    }

    #[test]
    fn test_k_beyond_distinct_pairs_returns_all_without_padding() {
        let records = vec![order("1", "A,B,C"), order("2", "A,B")];
        let top = top_pairs(&refs(&records), 10);

        assert_eq!(top.len(), 3);
        for (i, row) in top.iter().enumerate() {
            assert!(top[i + 1..].iter().all(|other| !other.pair.same_products(&row.pair)));
        }
        assert_eq!(top[0].label, "A & B");
        assert_eq!(top[0].count, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(top_pairs(&[], DEFAULT_TOP_PAIRS).is_empty());
    }

    #[test]
    fn test_pair_row_serializes() {
        let records = vec![order("1", "A,B")];
        let top = top_pairs(&refs(&records), 1);
        let json = serde_json::to_string(&top[0]).unwrap();
        assert!(json.contains("\"rank\":1"));
        assert!(json.contains("\"label\":\"A & B\""));
    }
}
