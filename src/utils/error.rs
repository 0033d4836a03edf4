//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating a survey configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML config: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    #[error("Sample size must be at least 1")]
    EmptySample,

    #[error("Distribution '{0}' has no labels")]
    NoLabels(String),

    #[error("Distribution '{field}' has {labels} labels but {weights} weights")]
    LengthMismatch {
        field: String,
        labels: usize,
        weights: usize,
    },

    #[error("Distribution '{field}' has an invalid weight {weight} for '{label}'")]
    InvalidWeight {
        field: String,
        label: String,
        weight: f64,
    },

    #[error("Distribution '{field}' weights sum to {sum}, expected 1.0")]
    WeightsNotNormalized { field: String, sum: f64 },

    #[error("Distribution '{field}' repeats label '{label}'")]
    DuplicateLabel { field: String, label: String },
}

/// Errors that can occur during frequency tabulation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabulateError {
    #[error("Invalid argument: cannot tabulate an empty record sequence")]
    EmptyInput,

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("Figure has no panels")]
    NoPanels,

    #[error("Chart '{0}' has no data")]
    EmptyPanel(String),

    #[error("Figure {width}x{height} is smaller than the {min_width}x{min_height} minimum")]
    FigureTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error("Failed to draw chart: {0}")]
    Drawing(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

impl OutputError {
    pub(crate) fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}
