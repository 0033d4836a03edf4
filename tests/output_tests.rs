use std::path::Path;
use social_media_survey::charts::{generate_figure, survey_panels, FigureConfig};
use social_media_survey::dataset::{generate_records, SurveyConfig};
use social_media_survey::output::{
    read_records_csv, validate_path, write_records_csv, write_report, write_svg,
};
use social_media_survey::report::{build_summary, render_report};
use social_media_survey::utils::error::OutputError;
use tempfile::NamedTempFile;

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_generated_dataset_round_trip() {
    let records = generate_records(&SurveyConfig::default()).unwrap();
    let temp_file = NamedTempFile::new().unwrap();

    write_records_csv(&records, temp_file.path()).unwrap();

    assert_eq!(read_records_csv(temp_file.path()).unwrap(), records);
}

#[test]
fn test_write_report_to_directory_fails_with_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = write_report("report", temp_dir.path());

    match result {
        Err(OutputError::InvalidPath(message)) => {
            assert!(message.contains(&temp_dir.path().display().to_string()));
        }
        other => panic!("expected InvalidPath, got {:?}", other),
    }
}

#[test]
fn test_full_figure_and_report() {
    let config = SurveyConfig::default();
    let records = generate_records(&config).unwrap();
    let summary = build_summary(&records, &config).unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let svg_path = temp_dir.path().join("charts/Full_Analysis_Report.svg");
    let report_path = temp_dir.path().join("Analytical_Results.txt");

    let svg = generate_figure(&survey_panels(&summary), &FigureConfig::default()).unwrap();
    write_svg(&svg, &svg_path).unwrap();
    write_report(&render_report(&summary), &report_path).unwrap();

    assert!(svg_path.exists());
    let report = std::fs::read_to_string(&report_path).unwrap();
    assert_eq!(
        report.lines().filter(|l| l.starts_with("- P(")).count(),
        summary.platforms.len()
    );
}
