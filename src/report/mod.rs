//! Survey summary and its text renderings.
//!
//! This module handles:
//! - Building the summary (all tables in one struct)
//! - Rendering the results file
//! - Rendering the console walkthrough

pub mod summary;
pub mod text;

// Re-export main types and functions
pub use summary::{build_summary, SurveySummary};
pub use text::{
    format_probability, render_console_report, render_frequency_table, render_grouped_tables,
    render_preview, render_report,
};
