//! Static Chart Renderer
//! Draws the summary bar chart with plotters and exports it as SVG.
//!
//! Layout mirrors the interactive window:
//! 1. Title: "Total {value} Distribution by {group}" centered
//! 2. One sky-blue bar per category, largest first
//! 3. Horizontal grid lines only, category labels rotated when crowded

use crate::charts::{value_bounds, ChartSpec, SKY_BLUE_RGB};
use crate::error::ReportError;
use crate::stats::GroupSummary;
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Figure size in pixels (12 x 7 inches at 100 dpi).
pub const DEFAULT_SIZE: (u32, u32) = (1200, 700);

const SKY_BLUE: RGBColor = RGBColor(SKY_BLUE_RGB.0, SKY_BLUE_RGB.1, SKY_BLUE_RGB.2);
const GRID: RGBColor = RGBColor(200, 200, 200);
const FONT: &str = "sans-serif";

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart into an SVG document.
    pub fn render_svg(
        summary: &GroupSummary,
        spec: &ChartSpec,
        size: (u32, u32),
    ) -> Result<String, ReportError> {
        if summary.is_empty() {
            return Err(ReportError::NothingToRender);
        }

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            Self::draw(&root, summary, spec)?;
        }
        Ok(svg)
    }

    /// Render the chart to an `.svg` file at `path`.
    pub fn save(
        summary: &GroupSummary,
        spec: &ChartSpec,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), ReportError> {
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !is_svg {
            return Err(ReportError::Unexpected(format!(
                "unsupported chart format '{}', expected an .svg path",
                path.display()
            )));
        }
        if summary.is_empty() {
            return Err(ReportError::NothingToRender);
        }

        let root = SVGBackend::new(path, size).into_drawing_area();
        Self::draw(&root, summary, spec)?;
        info!("chart written to {}", path.display());
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        summary: &GroupSummary,
        spec: &ChartSpec,
    ) -> Result<(), ReportError> {
        root.fill(&WHITE).map_err(draw_error)?;

        let categories = summary.categories();
        let rotate = ChartSpec::rotate_labels(categories.len());
        let (y_min, y_max) = value_bounds(summary.total_range());

        let x_label_area = if rotate {
            let longest = categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);
            (longest as u32 * 8 + 20).clamp(60, 220)
        } else {
            50
        };

        let mut chart = ChartBuilder::on(root)
            .caption(spec.title(), (FONT, 28))
            .margin(20)
            .x_label_area_size(x_label_area)
            .y_label_area_size(80)
            .build_cartesian_2d((0..categories.len()).into_segmented(), y_min..y_max)
            .map_err(draw_error)?;

        let label_style = if rotate {
            TextStyle::from((FONT, 14).into_font())
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Left, VPos::Center))
        } else {
            TextStyle::from((FONT, 14).into_font())
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(GRID.mix(0.7))
            .light_line_style(WHITE.mix(0.0))
            .x_labels(categories.len())
            .x_label_style(label_style)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(idx) => categories.get(*idx).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .x_desc(spec.x_label())
            .y_desc(spec.y_label())
            .axis_desc_style((FONT, 16))
            .draw()
            .map_err(draw_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(SKY_BLUE.filled())
                    .margin(8)
                    .data(summary.iter().enumerate().map(|(idx, entry)| (idx, entry.total))),
            )
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
        Ok(())
    }
}

fn draw_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Unexpected(format!("chart drawing failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::GroupTotal;

    fn summary(names: &[&str]) -> GroupSummary {
        GroupSummary::new(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| GroupTotal::new(*name, (names.len() - i) as f64 * 10.0))
                .collect(),
        )
    }

    #[test]
    fn svg_carries_title_axes_and_categories() {
        let spec = ChartSpec::new("Product", "Sales");
        let svg =
            StaticChartRenderer::render_svg(&summary(&["Gadget", "Widget"]), &spec, DEFAULT_SIZE)
                .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Total Sales Distribution by Product"));
        assert!(svg.contains("Total Sales"));
        assert!(svg.contains("Gadget"));
        assert!(svg.contains("Widget"));
    }

    #[test]
    fn crowded_axis_still_lists_every_category() {
        let names = ["a1", "b2", "c3", "d4", "e5", "f6", "g7", "h8"];
        let spec = ChartSpec::new("Region", "Sales");
        let svg = StaticChartRenderer::render_svg(&summary(&names), &spec, DEFAULT_SIZE).unwrap();

        for name in names {
            assert!(svg.contains(name), "missing label {name}");
        }
    }

    #[test]
    fn empty_summary_is_nothing_to_render() {
        let spec = ChartSpec::new("Product", "Sales");
        let err = StaticChartRenderer::render_svg(&GroupSummary::default(), &spec, DEFAULT_SIZE)
            .unwrap_err();
        assert!(matches!(err, ReportError::NothingToRender));
    }

    #[test]
    fn save_writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let spec = ChartSpec::new("Product", "Sales");

        StaticChartRenderer::save(&summary(&["Gadget"]), &spec, &path, DEFAULT_SIZE).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Gadget"));
    }

    #[test]
    fn save_rejects_other_formats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let spec = ChartSpec::new("Product", "Sales");

        let err = StaticChartRenderer::save(&summary(&["Gadget"]), &spec, &path, DEFAULT_SIZE)
            .unwrap_err();
        assert!(matches!(err, ReportError::Unexpected(_)));
        assert!(!path.exists());
    }
}
