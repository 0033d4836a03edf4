//! Plain-text report writer.

use super::path::prepare_output_path;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a rendered text report to a file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_report(report: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(|e| OutputError::write(output_path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(report.as_bytes())
        .map_err(|e| OutputError::write(output_path, e))?;
    writer
        .flush()
        .map_err(|e| OutputError::write(output_path, e))?;

    Ok(())
}
