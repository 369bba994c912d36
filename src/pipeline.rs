//! Report pipeline: load, clean, aggregate, render.

use crate::charts::{ChartSpec, StaticChartRenderer, DEFAULT_SIZE};
use crate::config::{OutputTarget, ReportConfig};
use crate::data::{DataCleaner, DataLoader};
use crate::error::ReportError;
use crate::gui::ChartWindow;
use crate::stats::{Aggregator, GroupSummary};
use log::{info, warn};
use std::io::Write;

const RULE_WIDTH: usize = 30;

/// Load the configured file and build its summary, printing the load
/// preview and the summary table to `out`.
pub fn build_summary<W: Write>(
    config: &ReportConfig,
    out: &mut W,
) -> Result<GroupSummary, ReportError> {
    let mut loader = DataLoader::new();
    loader.load_csv(&config.file)?;
    writeln!(out, "Data loaded successfully from {}.", config.file.display())?;

    if config.preview_rows > 0 {
        if let Some(preview) = loader.preview(config.preview_rows) {
            writeln!(out, "\n--- First {} rows of data ---", config.preview_rows)?;
            writeln!(out, "{preview}")?;
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        }
    }

    let columns = loader.get_columns();
    let df = loader
        .into_dataframe()
        .ok_or_else(|| ReportError::Unexpected("loader returned no data".into()))?;

    let summary = DataCleaner::coerce_numeric(&df, &config.value_column)
        .and_then(|cleaned| {
            Aggregator::summarize(&cleaned, &config.group_column, &config.value_column)
        })
        .or_else(|err| {
            if let ReportError::MissingColumn { .. } = err {
                writeln!(out, "\nAvailable columns: {}", columns.join(", "))?;
            }
            Err(err)
        })?;

    writeln!(
        out,
        "\n--- {} Summary by {} (Top Sellers) ---",
        config.value_column, config.group_column
    )?;
    write!(
        out,
        "{}",
        summary.to_text_table(&config.group_column, &config.value_column)
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    if config.summary_json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|err| ReportError::Unexpected(err.to_string()))?;
        writeln!(out, "{json}")?;
    }

    Ok(summary)
}

/// Draw the summary to the configured target.
pub fn render(summary: GroupSummary, config: &ReportConfig) -> Result<(), ReportError> {
    if summary.is_empty() {
        return Err(ReportError::NothingToRender);
    }

    let spec = ChartSpec::new(&config.group_column, &config.value_column);
    match &config.output {
        OutputTarget::Window => ChartWindow::show(summary, spec),
        OutputTarget::File { path, open } => {
            StaticChartRenderer::save(&summary, &spec, path, DEFAULT_SIZE)?;
            if *open {
                if let Err(err) = open::that(path) {
                    warn!("could not open {}: {}", path.display(), err);
                }
            }
            Ok(())
        }
        OutputTarget::Skip => {
            info!("chart skipped");
            Ok(())
        }
    }
}

/// One full report run.
pub fn run<W: Write>(config: &ReportConfig, out: &mut W) -> Result<GroupSummary, ReportError> {
    let summary = build_summary(config, out)?;
    render(summary.clone(), config)?;
    Ok(summary)
}
