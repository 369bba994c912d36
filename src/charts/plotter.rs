//! Chart Plotter Module
//! Draws the interactive summary bar chart using egui_plot.

use crate::charts::{short_label, value_bounds, ChartSpec, MAX_AXIS_LABEL_CHARS, SKY_BLUE_RGB};
use crate::stats::GroupSummary;
use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};

pub const BAR_COLOR: Color32 = Color32::from_rgb(SKY_BLUE_RGB.0, SKY_BLUE_RGB.1, SKY_BLUE_RGB.2);

const BAR_WIDTH: f64 = 0.6;

/// Creates the summary bar chart using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// One bar per group, placed at x = 0, 1, 2, ... in summary order.
    pub fn bars(summary: &GroupSummary) -> Vec<Bar> {
        summary
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Bar::new(i as f64, entry.total)
                    .name(&entry.category)
                    .width(BAR_WIDTH)
                    .fill(BAR_COLOR)
            })
            .collect()
    }

    /// Axis text for the tick at `x`, empty between bars.
    pub fn tick_label(categories: &[String], x: f64) -> String {
        let idx = x.round();
        if idx < 0.0 || (x - idx).abs() > f64::EPSILON {
            return String::new();
        }
        categories
            .get(idx as usize)
            .map(|c| short_label(c, MAX_AXIS_LABEL_CHARS))
            .unwrap_or_default()
    }

    /// Draw the bar chart filling the available space.
    /// X-axis: categories, Y-axis: summed values
    pub fn draw_bar_chart(ui: &mut egui::Ui, summary: &GroupSummary, spec: &ChartSpec) {
        let categories = summary.categories();
        let (y_min, y_max) = value_bounds(summary.total_range());

        Plot::new("summary_bar_chart")
            .x_axis_label(spec.x_label())
            .y_axis_label(spec.y_label())
            .allow_scroll(false)
            .show_x(false)
            .include_y(y_min)
            .include_y(y_max)
            .include_x(-0.5)
            .include_x(summary.len() as f64 - 0.5)
            .x_axis_formatter(move |mark, _range| Self::tick_label(&categories, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(Self::bars(summary))
                        .color(BAR_COLOR)
                        .name(spec.y_label()),
                );
            });
    }
}
