//! Sales Chart Window
//! Native window showing the summary bar chart until the user closes it.

use crate::charts::{ChartPlotter, ChartSpec};
use crate::error::ReportError;
use crate::stats::GroupSummary;
use eframe::egui;
use egui::RichText;
use log::info;

const WINDOW_SIZE: [f32; 2] = [1200.0, 700.0];
const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

/// Main application window.
pub struct SalesChartApp {
    summary: GroupSummary,
    spec: ChartSpec,
}

impl SalesChartApp {
    pub fn new(summary: GroupSummary, spec: ChartSpec) -> Self {
        Self { summary, spec }
    }
}

impl eframe::App for SalesChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(self.spec.title()).size(20.0).strong());
            });
            ui.add_space(8.0);
            ChartPlotter::draw_bar_chart(ui, &self.summary, &self.spec);
        });
    }
}

/// Blocking chart display.
pub struct ChartWindow;

impl ChartWindow {
    /// Open a window with the chart and return once it is closed.
    pub fn show(summary: GroupSummary, spec: ChartSpec) -> Result<(), ReportError> {
        if summary.is_empty() {
            return Err(ReportError::NothingToRender);
        }

        let title = spec.title();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(WINDOW_SIZE)
                .with_min_inner_size(MIN_WINDOW_SIZE)
                .with_title(&title),
            ..Default::default()
        };

        info!("showing {} bars in a window", summary.len());

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(SalesChartApp::new(summary, spec)))),
        )
        .map_err(|err| ReportError::Unexpected(format!("failed to open chart window: {err}")))
    }
}
