//! Chart rendering to SVG.
//!
//! This module converts frequency tables into a single SVG figure
//! holding several charts side by side, drawn with `plotters`.

pub mod generator;
pub mod panels;

// Re-export main types
pub use generator::{generate_figure, ChartKind, ChartPanel, FigureConfig};
pub use panels::survey_panels;
