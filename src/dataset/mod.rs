//! Survey records and their synthetic generation.
//!
//! This module handles:
//! - The record type and field selector
//! - Categorical distributions and TOML configuration
//! - Seeded sampling of the dataset

pub mod config;
pub mod generator;
pub mod record;

// Re-export main types
pub use config::{load_config, CategoricalDistribution, SurveyConfig};
pub use generator::generate_records;
pub use record::{Field, Record};
