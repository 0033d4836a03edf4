//! Survey summary schema.
//!
//! Collects every number the reports and charts need in one serializable
//! struct. Schema is versioned to allow future evolution.

use crate::dataset::config::SurveyConfig;
use crate::dataset::record::{Field, Record};
use crate::tabulate::{
    ordinal_range, tabulate, tabulate_grouped, FrequencyEntry, FrequencyTable, GroupedTable,
    OrdinalRange,
};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::TabulateError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Top-level summary written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Number of records analysed
    pub sample_size: u64,

    /// Seed the dataset was generated with (if any)
    pub seed: Option<u64>,

    /// Youngest and oldest observed age bracket
    pub age_range: Option<OrdinalRange>,

    /// Gender counts in configured label order
    pub gender_counts: Vec<FrequencyEntry>,

    pub platforms: FrequencyTable,
    pub hours: FrequencyTable,
    pub ages: FrequencyTable,

    /// Platform tables per gender
    pub platform_by_gender: GroupedTable,

    /// Timestamp when the summary was generated
    pub generated_at: String,
}

impl SurveySummary {
    /// Most frequent platform with its probability
    pub fn most_frequent_platform(&self) -> Option<(&str, f64)> {
        self.platforms
            .most_frequent()
            .map(|e| (e.label.as_str(), self.platforms.probability(&e.label)))
    }
}

/// Tabulate everything the reports need
///
/// # Errors
/// * `TabulateError::EmptyInput` - `records` is empty
pub fn build_summary(
    records: &[Record],
    config: &SurveyConfig,
) -> Result<SurveySummary, TabulateError> {
    let platforms = tabulate(records, Field::Platform)?;
    let hours = tabulate(records, Field::Hours)?;
    let ages = tabulate(records, Field::Age)?;
    let genders = tabulate(records, Field::Gender)?;
    let platform_by_gender = tabulate_grouped(records, Field::Gender, Field::Platform)?;

    let gender_counts = in_configured_order(&genders, &config.gender.labels);
    let age_range = ordinal_range(records, Field::Age, &config.age);

    debug!(
        "Summary built: {} platforms, {} gender groups",
        platforms.len(),
        platform_by_gender.len()
    );

    Ok(SurveySummary {
        version: SCHEMA_VERSION.to_string(),
        sample_size: platforms.total(),
        seed: config.seed,
        age_range,
        gender_counts,
        platforms,
        hours,
        ages,
        platform_by_gender,
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Counts for every configured label (zero included), then unexpected labels
fn in_configured_order(table: &FrequencyTable, labels: &[String]) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = labels
        .iter()
        .map(|label| FrequencyEntry::new(label.as_str(), table.count(label)))
        .collect();

    entries.extend(
        table
            .iter()
            .filter(|e| !labels.contains(&e.label))
            .cloned(),
    );

    entries
}
