//! CSV dataset writer and reader.
//!
//! The file starts with a UTF-8 byte-order mark so spreadsheet tools detect
//! the encoding. The reader accepts files with or without it.

use super::path::{file_size, prepare_output_path};
use crate::dataset::record::Record;
use crate::utils::config::UTF8_BOM;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write records to a CSV file
///
/// **Public** - main entry point for dataset output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::Csv` - record serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_records_csv(records: &[Record], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} records to: {}", records.len(), output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(|e| OutputError::write(output_path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(UTF8_BOM)
        .map_err(|e| OutputError::write(output_path, e))?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer
            .serialize(record)
            .map_err(|e| OutputError::csv(output_path, e))?;
    }
    csv_writer
        .flush()
        .map_err(|e| OutputError::write(output_path, e))?;

    info!("Dataset written successfully ({} bytes)", file_size(output_path));

    Ok(())
}

/// Read records from a CSV file written by `write_records_csv`
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::Csv` - malformed row
pub fn read_records_csv(input_path: impl AsRef<Path>) -> Result<Vec<Record>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading records from: {}", input_path.display());

    let contents = std::fs::read(input_path).map_err(|e| OutputError::read(input_path, e))?;
    let body = contents.strip_prefix(UTF8_BOM).unwrap_or(&contents[..]);

    let mut csv_reader = csv::Reader::from_reader(body);
    let records = csv_reader
        .deserialize()
        .collect::<Result<Vec<Record>, csv::Error>>()
        .map_err(|e| OutputError::csv(input_path, e))?;

    debug!("Loaded {} records", records.len());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new(1, "18-20", "Male", "Instagram", "<1 hour"),
            Record::new(2, "24+", "Female", "YouTube", ">4 hours"),
        ]
    }

    #[test]
    fn test_csv_layout() {
        let temp_file = NamedTempFile::new().unwrap();
        write_records_csv(&sample_records(), temp_file.path()).unwrap();

        let bytes = std::fs::read(temp_file.path()).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));

        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "Serial_Number,Age,Gender,Platform,Hours\n\
             1,18-20,Male,Instagram,<1 hour\n\
             2,24+,Female,YouTube,>4 hours\n"
        );
    }

    #[test]
    fn test_read_back() {
        let temp_file = NamedTempFile::new().unwrap();
        write_records_csv(&sample_records(), temp_file.path()).unwrap();

        assert_eq!(read_records_csv(temp_file.path()).unwrap(), sample_records());
    }

    #[test]
    fn test_read_without_bom() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(
            temp_file.path(),
            "Serial_Number,Age,Gender,Platform,Hours\n7,21-23,Female,TikTok,1-2 hours\n",
        )
        .unwrap();

        let records = read_records_csv(temp_file.path()).unwrap();
        assert_eq!(records, vec![Record::new(7, "21-23", "Female", "TikTok", "1-2 hours")]);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = read_records_csv(temp_dir.path().join("missing.csv"));
        assert!(matches!(result, Err(OutputError::ReadFailed { .. })));
    }

    #[test]
    fn test_serial_numbers_past_u32_range() {
        let serial = u64::from(u32::MAX) + 2;
        let records = vec![Record::new(serial, "18-20", "Male", "Twitter", "<1 hour")];
        let temp_file = NamedTempFile::new().unwrap();

        write_records_csv(&records, temp_file.path()).unwrap();

        let text = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(text.contains("\n4294967297,18-20,"));
        assert_eq!(read_records_csv(temp_file.path()).unwrap()[0].serial_number, serial);
    }
}
