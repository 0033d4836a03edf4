//! The four survey charts.

use super::generator::{ChartKind, ChartPanel};
use crate::report::SurveySummary;
use plotters::style::RGBColor;

pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Platform bar, platform pie, hours horizontal bar, age bar
pub fn survey_panels(summary: &SurveySummary) -> Vec<ChartPanel> {
    vec![
        ChartPanel::from_table(
            "Social Media Platform Preference Distribution",
            ChartKind::Bar,
            &summary.platforms,
        )
        .with_color(SKY_BLUE)
        .with_x_label("Platform")
        .with_y_label("Number of Students")
        .with_grid(true),
        ChartPanel::from_table("Platform Percentages", ChartKind::Pie, &summary.platforms),
        ChartPanel::from_table(
            "Daily Hours on Platforms",
            ChartKind::HorizontalBar,
            &summary.hours,
        )
        .with_color(LIGHT_GREEN)
        .with_x_label("Number of Students"),
        ChartPanel::from_table("Age Distribution", ChartKind::Bar, &summary.ages)
            .with_color(ORANGE)
            .with_x_label("Age Group")
            .with_y_label("Number of Students"),
    ]
}
