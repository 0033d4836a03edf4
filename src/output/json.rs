//! JSON summary output writer.
//!
//! Writes SurveySummary structs to JSON files with proper formatting.

use super::path::{file_size, prepare_output_path};
use crate::report::SurveySummary;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a summary to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let summary = build_summary(&records, &config)?;
/// write_summary(&summary, "summary.json")?;
/// ```
pub fn write_summary(summary: &SurveySummary, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(|e| OutputError::write(output_path, e))?;
    let mut writer = BufWriter::new(file);

    // Serialize to JSON with pretty printing
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer
        .flush()
        .map_err(|e| OutputError::write(output_path, e))?;

    info!("Summary written successfully ({} bytes)", file_size(output_path));

    Ok(())
}

/// Read a summary from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<SurveySummary, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(|e| OutputError::read(input_path, e))?;
    let summary: SurveySummary = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Summary loaded: version {}, {} records",
        summary.version, summary.sample_size
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Record, SurveyConfig};
    use crate::report::build_summary;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn create_test_summary() -> SurveySummary {
        let records = vec![
            Record::new(1, "18-20", "Male", "Instagram", "1-2 hours"),
            Record::new(2, "21-23", "Female", "TikTok", "<1 hour"),
        ];
        build_summary(&records, &SurveyConfig::default()).unwrap()
    }

    #[test]
    fn test_write_and_read_summary() {
        let summary = create_test_summary();
        let temp_file = NamedTempFile::new().unwrap();

        write_summary(&summary, temp_file.path()).unwrap();
        let loaded = read_summary(temp_file.path()).unwrap();

        assert_eq!(loaded, summary);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/summary.json");

        write_summary(&create_test_summary(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_read_invalid_json() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{ not json").unwrap();

        let result = read_summary(temp_file.path());
        assert!(matches!(result, Err(OutputError::SerializationFailed(_))));
    }
}
