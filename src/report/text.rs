//! Text renderings of a survey summary.
//!
//! Two layouts share the same numbers:
//! - `render_report`: the plain-text results file
//! - `render_console_report`: the longer walkthrough printed to stdout

use super::summary::SurveySummary;
use crate::dataset::record::Record;
use crate::tabulate::{FrequencyEntry, FrequencyTable, GroupedTable};
use crate::utils::config::{BANNER_WIDTH, CSV_HEADERS, REPORT_RULE_WIDTH};

/// `P(label) = count/total = p` with three decimals
pub fn format_probability(entry: &FrequencyEntry, total: u64) -> String {
    let p = entry.count as f64 / total as f64;
    format!("P({}) = {}/{} = {:.3}", entry.label, entry.count, total, p)
}

/// Render the results file (`Analytical_Results.txt`)
pub fn render_report(summary: &SurveySummary) -> String {
    let mut out = String::new();
    let n = summary.sample_size;

    out.push_str("Results of Social Media Platform Preference Analysis\n");
    out.push_str(&"=".repeat(REPORT_RULE_WIDTH));
    out.push_str("\n\n");

    out.push_str("Basic Information:\n");
    out.push_str(&format!("- Sample Size: {} students\n", n));
    if let Some(range) = &summary.age_range {
        out.push_str(&format!("- Age Range: {} - {}\n", range.min, range.max));
    }
    out.push_str(&format!(
        "- Gender Distribution: {}\n",
        format_gender_counts(&summary.gender_counts)
    ));
    out.push('\n');

    out.push_str("Probability Analysis:\n");
    for entry in summary.platforms.iter() {
        out.push_str(&format!("- {}\n", format_probability(entry, n)));
    }

    if let Some((label, p)) = summary.most_frequent_platform() {
        out.push_str(&format!(
            "\nConclusion: Highest probability for platform '{}' = {:.3}\n",
            label, p
        ));
    }

    out
}

/// Render the console walkthrough: data preview, probabilities, gender breakdown
pub fn render_console_report(summary: &SurveySummary, records: &[Record], preview_rows: usize) -> String {
    let mut out = String::new();
    let n = summary.sample_size;
    let rule = "=".repeat(BANNER_WIDTH);

    out.push_str(&format!(
        "{rule}\nReport: A Study of Social Media Platform Preferences\n{rule}\n"
    ));
    out.push_str(&format!("✓ Data for {} students created successfully\n", n));
    out.push_str("\nSample of the data:\n");
    out.push_str(&render_preview(records, preview_rows));

    out.push_str(&format!("\n{rule}\nPart 1: Probability Analysis\n{rule}\n"));
    out.push_str("\nSimple Probability P(A) = n(A)/n(S)\n");
    out.push_str(&format!(
        "Where: n(A) = number of elements in event A, n(S) = sample space size ({})\n",
        n
    ));

    out.push_str("\nPlatform Preference Probabilities:\n");
    for entry in summary.platforms.iter() {
        let p = entry.count as f64 / n as f64;
        out.push_str(&format!(
            "{}  ({:.1}%)\n",
            format_probability(entry, n),
            p * 100.0
        ));
    }

    if let Some((label, p)) = summary.most_frequent_platform() {
        out.push_str(&format!(
            "\nConclusion: The most preferred platform is '{}'\n",
            label
        ));
        out.push_str(&format!(
            "With probability: P({}) = {:.3} = {:.1}%\n",
            label,
            p,
            p * 100.0
        ));
    }

    out.push_str(&format!("\n{rule}\nPart 2: Analysis by Gender\n{rule}\n"));
    for gender in &summary.gender_counts {
        out.push_str(&format!(
            "\n{} Students ({} people):\n",
            gender.label, gender.count
        ));

        // A gender nobody was drawn for has a header but no table
        let Some(table) = summary.platform_by_gender.get(&gender.label) else {
            continue;
        };

        for platform in summary.platforms.first_seen() {
            let count = table.count(platform);
            if count > 0 {
                out.push_str(&format!(
                    "  {}: {} (P={:.2})\n",
                    platform,
                    count,
                    table.probability(platform)
                ));
            }
        }
    }

    out
}

/// Fixed-width table of the first `rows` records
pub fn render_preview(records: &[Record], rows: usize) -> String {
    let shown = &records[..rows.min(records.len())];

    let cells: Vec<[String; 5]> = shown
        .iter()
        .map(|r| {
            [
                r.serial_number.to_string(),
                r.age.clone(),
                r.gender.clone(),
                r.platform.clone(),
                r.hours.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = CSV_HEADERS.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = CSV_HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:>w$}", h, w = w))
        .collect();
    out.push_str(&header.join("  "));
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:>w$}", cell, w = w))
            .collect();
        out.push_str(&line.join("  "));
        out.push('\n');
    }

    out
}

/// Aligned `label  count  probability` lines for one table
pub fn render_frequency_table(table: &FrequencyTable) -> String {
    let width = table
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Label".len());

    let mut out = String::new();
    out.push_str(&format!(
        "  {:<width$}  {:>6}  {:>11}\n",
        "Label", "Count", "Probability"
    ));
    for entry in table.iter() {
        out.push_str(&format!(
            "  {:<width$}  {:>6}  {:>11.3}\n",
            entry.label,
            entry.count,
            table.probability(&entry.label)
        ));
    }
    out.push_str(&format!(
        "  {:<width$}  {:>6}  {:>11.3}\n",
        "Total",
        table.total(),
        1.0
    ));

    out
}

/// One frequency table per group, each under a `Field = value (n records):` header
///
/// Probabilities are relative to the group's own size.
pub fn render_grouped_tables(grouped: &GroupedTable) -> String {
    let mut out = String::new();
    for entry in grouped.iter() {
        out.push_str(&format!(
            "\n{} = {} ({} records):\n",
            grouped.group_field,
            entry.group,
            entry.table.total()
        ));
        out.push_str(&render_frequency_table(&entry.table));
    }
    out
}

/// `50 Male, 50 Female`
fn format_gender_counts(counts: &[FrequencyEntry]) -> String {
    counts
        .iter()
        .map(|e| format!("{} {}", e.count, e.label))
        .collect::<Vec<_>>()
        .join(", ")
}
