use crate::charts::FigureConfig;
use crate::dataset::Field;
use crate::report::SurveySummary;
use std::path::PathBuf;

/// Arguments for the run command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// TOML survey configuration (defaults when None)
    pub config_path: Option<PathBuf>,

    /// Overrides the configured sample size
    pub sample_size: Option<usize>,

    /// Overrides the configured seed
    pub seed: Option<u64>,

    /// Ignore any seed and draw from entropy
    pub unseeded: bool,

    /// Directory receiving the CSV, report and figure
    pub output_dir: PathBuf,

    /// Output path for the JSON summary (optional)
    pub summary_json: Option<PathBuf>,

    /// Render the chart figure
    pub charts: bool,

    pub figure_config: FigureConfig,

    /// Print the console walkthrough to stdout
    pub print_report: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            config_path: None,
            sample_size: None,
            seed: None,
            unseeded: false,
            output_dir: PathBuf::from("."),
            summary_json: None,
            charts: true,
            figure_config: FigureConfig::default(),
            print_report: false,
        }
    }
}

/// Files written by a run, plus the summary they were built from
#[derive(Debug, Clone)]
pub struct RunOutputs {
    pub data_path: PathBuf,
    pub report_path: PathBuf,
    pub figure_path: Option<PathBuf>,
    pub summary_path: Option<PathBuf>,
    pub summary: SurveySummary,
}

/// Arguments for the tabulate command
#[derive(Debug, Clone)]
pub struct TabulateArgs {
    /// CSV dataset to read
    pub file: PathBuf,

    /// Field to count
    pub field: Field,

    /// Optional grouping field for a cross-tabulation
    pub by: Option<Field>,
}
