//! Survey figure rendering with `plotters`.
//!
//! Panels are drawn onto one SVG canvas, split into a grid two charts wide:
//! - Vertical bar charts with an optional light value grid
//! - Horizontal bar charts (first entry at the bottom)
//! - Pie charts starting at 12 o'clock with a percentage on each slice

use crate::tabulate::FrequencyTable;
use crate::utils::config::{
    DEFAULT_FIGURE_HEIGHT, DEFAULT_FIGURE_WIDTH, MIN_FIGURE_HEIGHT, MIN_FIGURE_WIDTH,
};
use crate::utils::error::ChartError;
use log::{debug, info};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;

/// Slice colors, cycled when a pie has more entries
const PIE_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

const FONT: &str = "sans-serif";

/// Figure configuration
#[derive(Debug, Clone)]
pub struct FigureConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            title: "Social Media Platform Preferences".to_string(),
            width: DEFAULT_FIGURE_WIDTH,
            height: DEFAULT_FIGURE_HEIGHT,
        }
    }
}

impl FigureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Reject canvases too small to hold labelled panels
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.width < MIN_FIGURE_WIDTH || self.height < MIN_FIGURE_HEIGHT {
            return Err(ChartError::FigureTooSmall {
                width: self.width,
                height: self.height,
                min_width: MIN_FIGURE_WIDTH,
                min_height: MIN_FIGURE_HEIGHT,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Pie,
}

/// One chart in the figure
#[derive(Debug, Clone)]
pub struct ChartPanel {
    pub title: String,
    pub kind: ChartKind,

    /// Bar fill (ignored by pie charts)
    pub color: RGBColor,

    pub x_label: Option<String>,
    pub y_label: Option<String>,

    /// Draw grid lines along the value axis
    pub grid: bool,

    /// Labels with their values, in drawing order
    pub data: Vec<(String, u64)>,
}

impl ChartPanel {
    pub fn new(title: impl Into<String>, kind: ChartKind, data: Vec<(String, u64)>) -> Self {
        Self {
            title: title.into(),
            kind,
            color: RGBColor(135, 206, 235),
            x_label: None,
            y_label: None,
            grid: false,
            data,
        }
    }

    /// Panel plotting a frequency table in table order
    pub fn from_table(title: impl Into<String>, kind: ChartKind, table: &FrequencyTable) -> Self {
        let data = table.iter().map(|e| (e.label.clone(), e.count)).collect();
        Self::new(title, kind, data)
    }

    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    fn total(&self) -> u64 {
        self.data.iter().map(|(_, v)| v).sum()
    }

    /// Top of the value axis, with headroom above the tallest bar
    fn value_axis_max(&self) -> u64 {
        let max = self.data.iter().map(|(_, v)| *v).max().unwrap_or(0);
        max + max / 10 + 1
    }

    /// Category label under a segment centre
    fn segment_label(&self, value: &SegmentValue<u32>) -> String {
        match value {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => self
                .data
                .get(*i as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        }
    }

    fn indexed_values(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, (_, value))| (i as u32, *value))
    }
}

/// Generate an SVG figure holding every panel
///
/// # Errors
/// * `ChartError::NoPanels` - `panels` is empty
/// * `ChartError::EmptyPanel` - a panel has no data or only zero values
/// * `ChartError::FigureTooSmall` - the canvas is below the minimum size
/// * `ChartError::Drawing` - plotters failed to render
pub fn generate_figure(panels: &[ChartPanel], config: &FigureConfig) -> Result<String, ChartError> {
    if panels.is_empty() {
        return Err(ChartError::NoPanels);
    }
    if let Some(panel) = panels.iter().find(|p| p.total() == 0) {
        return Err(ChartError::EmptyPanel(panel.title.clone()));
    }
    config.validate()?;

    info!("Generating figure with {} charts", panels.len());

    let rows = (panels.len() + 1) / 2;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let body = root
            .titled(&config.title, (FONT, 28))
            .map_err(drawing_error)?;
        let cells = body.split_evenly((rows, 2));

        for (panel, cell) in panels.iter().zip(cells.iter()) {
            debug!("Drawing {:?} chart '{}'", panel.kind, panel.title);
            match panel.kind {
                ChartKind::Bar => draw_bar(cell, panel)?,
                ChartKind::HorizontalBar => draw_horizontal_bar(cell, panel)?,
                ChartKind::Pie => draw_pie(cell, panel)?,
            }
        }

        root.present().map_err(drawing_error)?;
    }

    debug!("Figure size: {} bytes", svg.len());
    Ok(svg)
}

fn draw_bar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &ChartPanel,
) -> Result<(), ChartError> {
    let categories = panel.data.len() as u32;
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 20))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..categories).into_segmented(), 0u64..panel.value_axis_max())
        .map_err(drawing_error)?;

    let label_of = |value: &SegmentValue<u32>| panel.segment_label(value);
    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(panel.data.len() + 1)
        .x_label_formatter(&label_of)
        .label_style((FONT, 13));
    if panel.grid {
        mesh.bold_line_style(BLACK.mix(0.15))
            .light_line_style(WHITE);
    } else {
        mesh.disable_y_mesh();
    }
    if let Some(label) = &panel.x_label {
        mesh.x_desc(label.as_str());
    }
    if let Some(label) = &panel.y_label {
        mesh.y_desc(label.as_str());
    }
    mesh.draw().map_err(drawing_error)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(panel.color.filled())
                .margin(12)
                .data(panel.indexed_values()),
        )
        .map_err(drawing_error)?;

    Ok(())
}

fn draw_horizontal_bar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &ChartPanel,
) -> Result<(), ChartError> {
    let categories = panel.data.len() as u32;
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 20))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(90)
        .build_cartesian_2d(0u64..panel.value_axis_max(), (0u32..categories).into_segmented())
        .map_err(drawing_error)?;

    let label_of = |value: &SegmentValue<u32>| panel.segment_label(value);
    let mut mesh = chart.configure_mesh();
    mesh.disable_y_mesh()
        .y_labels(panel.data.len() + 1)
        .y_label_formatter(&label_of)
        .label_style((FONT, 13));
    if panel.grid {
        mesh.bold_line_style(BLACK.mix(0.15))
            .light_line_style(WHITE);
    } else {
        mesh.disable_x_mesh();
    }
    if let Some(label) = &panel.x_label {
        mesh.x_desc(label.as_str());
    }
    if let Some(label) = &panel.y_label {
        mesh.y_desc(label.as_str());
    }
    mesh.draw().map_err(drawing_error)?;

    chart
        .draw_series(
            Histogram::horizontal(&chart)
                .style(panel.color.filled())
                .margin(12)
                .data(panel.indexed_values()),
        )
        .map_err(drawing_error)?;

    Ok(())
}

fn draw_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &ChartPanel,
) -> Result<(), ChartError> {
    let area = area.titled(&panel.title, (FONT, 20)).map_err(drawing_error)?;

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let sizes: Vec<f64> = panel.data.iter().map(|(_, v)| *v as f64).collect();
    let labels: Vec<&str> = panel.data.iter().map(|(label, _)| label.as_str()).collect();
    let colors: Vec<RGBColor> = (0..sizes.len())
        .map(|i| PIE_PALETTE[i % PIE_PALETTE.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style((FONT, 14));
    pie.percentages((FONT, 13));
    area.draw(&pie).map_err(drawing_error)?;

    Ok(())
}

fn drawing_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Drawing(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
        pairs.iter().map(|(l, v)| (l.to_string(), *v)).collect()
    }

    #[test]
    fn test_no_panels() {
        let result = generate_figure(&[], &FigureConfig::default());
        assert_eq!(result, Err(ChartError::NoPanels));
    }

    #[test]
    fn test_empty_panel_rejected() {
        let panels = vec![
            ChartPanel::new("Ages", ChartKind::Bar, data(&[("18-20", 3)])),
            ChartPanel::new("Empty", ChartKind::Pie, data(&[("a", 0)])),
        ];
        let result = generate_figure(&panels, &FigureConfig::default());
        assert_eq!(result, Err(ChartError::EmptyPanel("Empty".to_string())));
    }

    #[test]
    fn test_tiny_figure_rejected() {
        let panels = vec![ChartPanel::new("Ages", ChartKind::Bar, data(&[("18-20", 3)]))];
        let config = FigureConfig::new().with_size(100, 100);

        assert_eq!(
            generate_figure(&panels, &config),
            Err(ChartError::FigureTooSmall {
                width: 100,
                height: 100,
                min_width: MIN_FIGURE_WIDTH,
                min_height: MIN_FIGURE_HEIGHT,
            })
        );
    }

    #[test]
    fn test_bar_figure_is_svg_document() {
        let panels = vec![ChartPanel::new(
            "Ages",
            ChartKind::Bar,
            data(&[("18-20", 60), ("21-23", 30), ("24+", 10)]),
        )
        .with_x_label("Age Group")];
        let config = FigureConfig::new().with_title("Survey Figure");
        let svg = generate_figure(&panels, &config).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Survey Figure"));
        assert!(svg.contains("Ages"));
        assert!(svg.contains("Age Group"));
        assert!(svg.contains("18-20"));
    }

    #[test]
    fn test_every_chart_kind_renders() {
        let values = data(&[("Instagram", 35), ("TikTok", 65)]);
        let panels = vec![
            ChartPanel::new("Bars", ChartKind::Bar, values.clone()).with_grid(true),
            ChartPanel::new("Share", ChartKind::Pie, values.clone()),
            ChartPanel::new("Sideways", ChartKind::HorizontalBar, values),
        ];
        let svg = generate_figure(&panels, &FigureConfig::default()).unwrap();

        for title in ["Bars", "Share", "Sideways"] {
            assert!(svg.contains(title), "missing panel {}", title);
        }
        assert!(svg.contains("Instagram"));
        assert!(svg.contains("TikTok"));
    }

    #[test]
    fn test_segment_label_lookup() {
        let panel = ChartPanel::new("P", ChartKind::Bar, data(&[("a", 1), ("b", 2)]));

        assert_eq!(panel.segment_label(&SegmentValue::CenterOf(1)), "b");
        assert_eq!(panel.segment_label(&SegmentValue::CenterOf(5)), "");
        assert_eq!(panel.segment_label(&SegmentValue::Last), "");
    }

    #[test]
    fn test_value_axis_headroom() {
        let panel = ChartPanel::new("P", ChartKind::Bar, data(&[("a", 35), ("b", 60)]));
        assert_eq!(panel.value_axis_max(), 67);
    }
}
