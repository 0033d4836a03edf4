//! Configuration and constants for the CLI.

/// Current summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default number of synthetic students
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Default RNG seed, so repeated runs produce the same dataset
pub const DEFAULT_SEED: u64 = 123;

// Distribution weights must sum to 1.0 within this tolerance
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

// Output file names (written into the output directory)
pub const DATA_FILE_NAME: &str = "Study_Data.csv";
pub const REPORT_FILE_NAME: &str = "Analytical_Results.txt";
pub const FIGURE_FILE_NAME: &str = "Full_Analysis_Report.svg";
pub const CONFIG_FILE_NAME: &str = "survey.toml";

// Figure size in pixels (2x2 grid of charts)
pub const DEFAULT_FIGURE_WIDTH: u32 = 1500;
pub const DEFAULT_FIGURE_HEIGHT: u32 = 1200;

// Smallest figure that still leaves room for axis labels in every panel
pub const MIN_FIGURE_WIDTH: u32 = 600;
pub const MIN_FIGURE_HEIGHT: u32 = 480;

// CSV column headers
pub const CSV_HEADERS: &[&str] = &["Serial_Number", "Age", "Gender", "Platform", "Hours"];

/// Rows shown in the console data preview
pub const PREVIEW_ROWS: usize = 5;

/// Width of the `=` banner rules on the console
pub const BANNER_WIDTH: usize = 70;

/// Width of the `=` rule under the text report title
pub const REPORT_RULE_WIDTH: usize = 60;

/// UTF-8 byte-order mark written at the start of the CSV file
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
