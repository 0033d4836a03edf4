//! Run command implementation.
//!
//! The run command:
//! 1. Resolves the survey configuration
//! 2. Generates the synthetic records
//! 3. Tabulates probabilities
//! 4. Renders the chart figure
//! 5. Writes output files

use super::models::{RunArgs, RunOutputs};
use crate::charts::{generate_figure, survey_panels};
use crate::dataset::{generate_records, load_config, SurveyConfig};
use crate::output::{write_records_csv, write_report, write_summary, write_svg};
use crate::report::{build_summary, render_console_report, render_report};
use crate::utils::config::{
    BANNER_WIDTH, DATA_FILE_NAME, FIGURE_FILE_NAME, PREVIEW_ROWS, REPORT_FILE_NAME,
};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the run command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Paths of the written files and the summary, Err with context if any step fails
///
/// # Errors
/// * Config read or validation failures
/// * File write errors
pub fn execute_run(args: RunArgs) -> Result<RunOutputs> {
    let start_time = Instant::now();

    // Step 1: Resolve config
    info!("Step 1/5: Resolving survey configuration...");
    let config = resolve_config(&args)?;
    debug!(
        "Sample size {}, seed {:?}",
        config.sample_size, config.seed
    );

    // Step 2: Generate records
    info!("Step 2/5: Generating {} records...", config.sample_size);
    let records = generate_records(&config).context("Failed to generate survey records")?;

    // Step 3: Tabulate
    info!("Step 3/5: Tabulating probabilities...");
    let summary = build_summary(&records, &config).context("Failed to tabulate records")?;

    if let Some((label, p)) = summary.most_frequent_platform() {
        info!("Most frequent platform: {} (P={:.3})", label, p);
    }

    if args.print_report {
        print!("{}", render_console_report(&summary, &records, PREVIEW_ROWS));
    }

    // Step 4: Render charts (if requested)
    let figure = if args.charts {
        info!("Step 4/5: Rendering charts...");
        let panels = survey_panels(&summary);
        Some(generate_figure(&panels, &args.figure_config).context("Failed to render charts")?)
    } else {
        info!("Step 4/5: Skipping charts (not requested)");
        None
    };

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");

    let data_path = args.output_dir.join(DATA_FILE_NAME);
    write_records_csv(&records, &data_path).context("Failed to write dataset CSV")?;

    let report_path = args.output_dir.join(REPORT_FILE_NAME);
    write_report(&render_report(&summary), &report_path)
        .context("Failed to write text report")?;

    let figure_path = match figure {
        Some(svg) => {
            let path = args.output_dir.join(FIGURE_FILE_NAME);
            write_svg(&svg, &path).context("Failed to write chart figure")?;
            Some(path)
        }
        None => None,
    };

    if let Some(path) = &args.summary_json {
        write_summary(&summary, path).context("Failed to write JSON summary")?;
    }

    if args.print_report {
        println!();
        if let Some(path) = &figure_path {
            println!("✓ Created 4 charts in file: '{}'", path.display());
        }
        println!("✓ Full data saved in: '{}'", data_path.display());
        println!("✓ Analytical results saved in: '{}'", report_path.display());
        if let Some(path) = &args.summary_json {
            println!("✓ Summary saved in: '{}'", path.display());
        }
        println!("{}", "=".repeat(BANNER_WIDTH));
    }

    let elapsed = start_time.elapsed();
    info!("Run completed in {:.2}s", elapsed.as_secs_f64());

    Ok(RunOutputs {
        data_path,
        report_path,
        figure_path,
        summary_path: args.summary_json.clone(),
        summary,
    })
}

/// Load the config (or defaults) and apply CLI overrides
///
/// **Private** - internal helper for execute_run
fn resolve_config(args: &RunArgs) -> Result<SurveyConfig> {
    let mut config = match &args.config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SurveyConfig::default(),
    };

    if let Some(sample_size) = args.sample_size {
        config = config.with_sample_size(sample_size);
    }
    if args.unseeded {
        config = config.with_seed(None);
    } else if let Some(seed) = args.seed {
        config = config.with_seed(Some(seed));
    }

    config.validate().context("Invalid survey configuration")?;
    Ok(config)
}

/// Validate run arguments
///
/// **Public** - can be called before execute_run for early validation
pub fn validate_args(args: &RunArgs) -> Result<()> {
    if args.sample_size == Some(0) {
        anyhow::bail!("sample size must be greater than 0");
    }

    if args.unseeded && args.seed.is_some() {
        anyhow::bail!("--seed and --unseeded cannot be combined");
    }

    if args.output_dir.is_file() {
        anyhow::bail!(
            "Output directory is a file: {}",
            args.output_dir.display()
        );
    }

    if args.charts {
        args.figure_config
            .validate()
            .context("Invalid figure size")?;
    }

    Ok(())
}
