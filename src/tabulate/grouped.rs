//! Cross-tabulation: one frequency table per group.
//!
//! Records are partitioned by a grouping field (e.g. gender) and the inner
//! field (e.g. platform) is tabulated within each partition. Probabilities
//! in a group's table are relative to that group's size.

use super::frequency::FrequencyTable;
use crate::dataset::record::{Field, Record};
use crate::utils::error::TabulateError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Frequency table of the inner field for one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTable {
    pub group: String,
    pub table: FrequencyTable,
}

/// Nested tables keyed by group, in first-seen group order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedTable {
    pub group_field: String,
    pub inner_field: String,
    pub groups: Vec<GroupTable>,
}

impl GroupedTable {
    /// Table for a group, `None` if no record belongs to it
    pub fn get(&self, group: &str) -> Option<&FrequencyTable> {
        self.groups
            .iter()
            .find(|g| g.group == group)
            .map(|g| &g.table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupTable> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Partition by `group_field`, then tabulate `inner_field` per partition
///
/// Groups without records never appear, so every nested table is non-empty.
///
/// # Errors
/// * `TabulateError::EmptyInput` - `records` is empty
pub fn tabulate_grouped(
    records: &[Record],
    group_field: Field,
    inner_field: Field,
) -> Result<GroupedTable, TabulateError> {
    if records.is_empty() {
        return Err(TabulateError::EmptyInput);
    }

    let mut partitions: Vec<(&str, Vec<&str>)> = Vec::new();
    for record in records {
        let group = record.value(group_field);
        let inner = record.value(inner_field);
        match partitions.iter_mut().find(|(g, _)| *g == group) {
            Some((_, values)) => values.push(inner),
            None => partitions.push((group, vec![inner])),
        }
    }

    let groups = partitions
        .into_iter()
        .map(|(group, values)| {
            Ok(GroupTable {
                group: group.to_string(),
                table: FrequencyTable::from_labels(values)?,
            })
        })
        .collect::<Result<Vec<_>, TabulateError>>()?;

    debug!(
        "Cross-tabulated {} by {} into {} groups",
        inner_field,
        group_field,
        groups.len()
    );

    Ok(GroupedTable {
        group_field: group_field.column_name().to_string(),
        inner_field: inner_field.column_name().to_string(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gender: &str, platform: &str) -> Record {
        Record::new(0, "18-20", gender, platform, "<1 hour")
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let records = vec![
            record("Female", "TikTok"),
            record("Male", "Instagram"),
            record("Female", "Instagram"),
            record("Female", "TikTok"),
        ];

        let grouped = tabulate_grouped(&records, Field::Gender, Field::Platform).unwrap();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.groups[0].group, "Female");
        assert_eq!(grouped.groups[1].group, "Male");

        let female = grouped.get("Female").unwrap();
        assert_eq!(female.total(), 3);
        assert_eq!(female.count("TikTok"), 2);
        assert!((female.probability("TikTok") - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_group_omitted() {
        let records = vec![record("Male", "Facebook")];
        let grouped = tabulate_grouped(&records, Field::Gender, Field::Platform).unwrap();

        assert!(grouped.get("Female").is_none());
        assert_eq!(grouped.get("Male").unwrap().probability("Facebook"), 1.0);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(
            tabulate_grouped(&[], Field::Gender, Field::Platform),
            Err(TabulateError::EmptyInput)
        );
    }
}
