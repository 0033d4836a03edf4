//! Social Media Survey CLI
//!
//! Generates a synthetic student survey, reports platform probabilities,
//! and writes the dataset, a text report and a chart figure.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use social_media_survey::charts::FigureConfig;
use social_media_survey::commands::{
    display_version, execute_init, execute_run, execute_tabulate, validate_args, RunArgs,
    TabulateArgs,
};
use social_media_survey::dataset::Field;
use social_media_survey::utils::config::{
    CONFIG_FILE_NAME, DEFAULT_FIGURE_HEIGHT, DEFAULT_FIGURE_WIDTH,
};

/// Social Media Survey - synthetic data and empirical probabilities
#[derive(Parser, Debug)]
#[command(name = "survey")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the survey, tabulate it and write all outputs
    Run {
        /// TOML survey configuration
        #[arg(short, long, env = "SURVEY_CONFIG")]
        config: Option<PathBuf>,

        /// Number of students to generate
        #[arg(short = 'n', long)]
        sample_size: Option<usize>,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Draw from entropy instead of a fixed seed
        #[arg(long)]
        unseeded: bool,

        /// Directory for the CSV, report and figure
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Also write a JSON summary to this path
        #[arg(long)]
        summary_json: Option<PathBuf>,

        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,

        /// Figure title
        #[arg(long)]
        title: Option<String>,

        /// Figure width in pixels
        #[arg(long, default_value_t = DEFAULT_FIGURE_WIDTH)]
        width: u32,

        /// Figure height in pixels
        #[arg(long, default_value_t = DEFAULT_FIGURE_HEIGHT)]
        height: u32,

        /// Do not print the console report
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a frequency table from a dataset CSV
    Tabulate {
        /// Path to dataset CSV
        #[arg(short, long)]
        file: PathBuf,

        /// Field to count (age, gender, platform, hours)
        #[arg(long, default_value = "platform")]
        field: Field,

        /// Cross-tabulate within each value of this field
        #[arg(long)]
        by: Option<Field>,
    },

    /// Write the default survey configuration
    Init {
        /// Config file to create
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Run {
            config,
            sample_size,
            seed,
            unseeded,
            output_dir,
            summary_json,
            no_charts,
            title,
            width,
            height,
            quiet,
        } => {
            let mut figure_config = FigureConfig::new().with_size(width, height);
            if let Some(title_str) = title {
                figure_config = figure_config.with_title(title_str);
            }

            let args = RunArgs {
                config_path: config,
                sample_size,
                seed,
                unseeded,
                output_dir,
                summary_json,
                charts: !no_charts,
                figure_config,
                print_report: !quiet,
            };

            // Validate args first
            validate_args(&args)?;

            execute_run(args)?;
        }

        Commands::Tabulate { file, field, by } => {
            execute_tabulate(&TabulateArgs { file, field, by })?;
        }

        Commands::Init { path, force } => {
            execute_init(&path, force)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
