//! Social Media Survey
//!
//! Synthesizes a student social-media usage survey, tabulates empirical
//! probabilities (per platform, and per platform within each gender),
//! renders descriptive charts, and writes the dataset and a text report.
//!
//! This crate provides the core implementation for the `survey` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! survey run --output-dir results
//! survey tabulate --file results/Study_Data.csv --field platform --by gender
//! ```

pub mod charts;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod report;
pub mod tabulate;
pub mod utils;
