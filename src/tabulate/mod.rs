//! Empirical probability tabulation.
//!
//! This module turns survey records into:
//! - Frequency tables (label counts and proportions)
//! - Cross-tabulations (one table per group)
//! - Ordinal ranges of bracketed fields

pub mod frequency;
pub mod grouped;
pub mod ordinal;

// Re-export main types and functions
pub use frequency::{tabulate, FrequencyEntry, FrequencyTable};
pub use grouped::{tabulate_grouped, GroupTable, GroupedTable};
pub use ordinal::{ordinal_range, OrdinalRange};
