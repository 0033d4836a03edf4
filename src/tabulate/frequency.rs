//! Frequency tables and empirical probabilities.
//!
//! A frequency table counts how often each label of one field occurs.
//! Entries are ordered by descending count; equal counts keep the order in
//! which the labels were first seen.
//!
//! Example: platforms `[TikTok, Instagram, TikTok]` tabulate to
//! `TikTok 2, Instagram 1`, so `P(TikTok) = 2/3`.

use crate::dataset::record::{Field, Record};
use crate::utils::error::TabulateError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single label with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub label: String,
    pub count: u64,
}

impl FrequencyEntry {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Label counts for one field over a set of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Entries sorted by count (descending), ties in first-seen order
    entries: Vec<FrequencyEntry>,

    /// Labels in the order they first occurred
    first_seen: Vec<String>,

    /// Number of records tabulated
    total: u64,
}

impl FrequencyTable {
    /// Count labels in first-seen order, then sort
    ///
    /// Returns `TabulateError::EmptyInput` when `labels` yields nothing.
    pub fn from_labels<'a, I>(labels: I) -> Result<Self, TabulateError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<FrequencyEntry> = Vec::new();
        let mut total = 0u64;

        for label in labels {
            total += 1;
            match positions.get(label) {
                Some(&i) => entries[i].count += 1,
                None => {
                    positions.insert(label, entries.len());
                    entries.push(FrequencyEntry::new(label, 1));
                }
            }
        }

        if total == 0 {
            return Err(TabulateError::EmptyInput);
        }

        let first_seen = entries.iter().map(|e| e.label.clone()).collect();

        // sort_by is stable, so ties stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(Self {
            entries,
            first_seen,
            total,
        })
    }

    /// Labels in first-occurrence order, independent of counts
    pub fn first_seen(&self) -> &[String] {
        &self.first_seen
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    /// Number of records tabulated
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for a label, 0 if it was never observed
    pub fn count(&self, label: &str) -> u64 {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// Empirical probability `count / total`, always in [0, 1]
    pub fn probability(&self, label: &str) -> f64 {
        self.count(label) as f64 / self.total as f64
    }

    /// Labels with their probabilities, in table order
    pub fn proportions(&self) -> Vec<(&str, f64)> {
        self.entries
            .iter()
            .map(|e| (e.label.as_str(), e.count as f64 / self.total as f64))
            .collect()
    }

    /// Entry with the highest count (first-seen wins ties)
    pub fn most_frequent(&self) -> Option<&FrequencyEntry> {
        self.entries.first()
    }
}

/// Tabulate one field over a record sequence
///
/// **Public** - main entry point for frequency counting
///
/// # Errors
/// * `TabulateError::EmptyInput` - `records` is empty
pub fn tabulate(records: &[Record], field: Field) -> Result<FrequencyTable, TabulateError> {
    debug!("Tabulating {} over {} records", field, records.len());
    FrequencyTable::from_labels(records.iter().map(|r| r.value(field)))
}
