use super::models::TabulateArgs;
use crate::dataset::SurveyConfig;
use crate::output::read_records_csv;
use crate::report::{render_frequency_table, render_grouped_tables};
use crate::tabulate::{tabulate, tabulate_grouped};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

/// Print a frequency table (or cross-tabulation) of a CSV dataset
pub fn execute_tabulate(args: &TabulateArgs) -> Result<()> {
    let records = read_records_csv(&args.file)
        .with_context(|| format!("Failed to read dataset {}", args.file.display()))?;

    println!("Dataset: {} ({} records)", args.file.display(), records.len());

    match args.by {
        None => {
            let table = tabulate(&records, args.field)?;
            println!("\n{} frequencies:", args.field);
            print!("{}", render_frequency_table(&table));
            if let Some(top) = table.most_frequent() {
                println!("\nMost frequent: '{}'", top.label);
            }
        }
        Some(group) => {
            let grouped = tabulate_grouped(&records, group, args.field)?;
            print!("{}", render_grouped_tables(&grouped));
        }
    }

    Ok(())
}

/// Write the default survey configuration to `path`
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let contents = SurveyConfig::default()
        .to_toml_string()
        .context("Failed to serialize default config")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config {}", path.display()))?;

    info!("Default config written to {}", path.display());
    println!("Created {} with default survey settings", path.display());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Social Media Survey v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Synthetic student survey generation and probability tabulation.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load_config;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("survey.toml");

        execute_init(&path, false).unwrap();

        assert_eq!(load_config(&path).unwrap(), SurveyConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();

        assert!(execute_init(temp_file.path(), false).is_err());
        assert!(execute_init(temp_file.path(), true).is_ok());
    }
}
