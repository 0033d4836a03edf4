//! Ordinal range of a bracketed field.
//!
//! Brackets such as "18-20" or "24+" are ranked by their position in the
//! configured label order, not compared as strings.

use crate::dataset::config::CategoricalDistribution;
use crate::dataset::record::{Field, Record};
use serde::{Deserialize, Serialize};

/// Lowest and highest observed bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinalRange {
    pub min: String,
    pub max: String,
}

/// Smallest and largest observed label of `field`, ranked by `order`
///
/// Labels missing from `order` rank after every known label. Returns `None`
/// for an empty record sequence.
pub fn ordinal_range(
    records: &[Record],
    field: Field,
    order: &CategoricalDistribution,
) -> Option<OrdinalRange> {
    let rank = |label: &str| order.rank(label).unwrap_or(usize::MAX);

    let min = records
        .iter()
        .map(|r| r.value(field))
        .min_by_key(|label| rank(*label))?;
    let max = records
        .iter()
        .map(|r| r.value(field))
        .max_by_key(|label| rank(*label))?;

    Some(OrdinalRange {
        min: min.to_string(),
        max: max.to_string(),
    })
}
