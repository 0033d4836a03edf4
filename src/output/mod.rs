//! Output writers for survey data, reports and charts.
//!
//! This module handles writing data to disk in various formats:
//! - CSV datasets
//! - Text reports
//! - SVG figures
//! - JSON summaries

pub mod json;
pub mod path;
pub mod records;
pub mod svg;
pub mod text;

// Re-export main functions
pub use json::{read_summary, write_summary};
pub use path::{prepare_output_path, validate_path};
pub use records::{read_records_csv, write_records_csv};
pub use svg::write_svg;
pub use text::write_report;
