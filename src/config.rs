//! Report configuration and command line parsing.

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_FILE: &str = "sales_data.csv";
pub const DEFAULT_GROUP_COLUMN: &str = "Product";
pub const DEFAULT_VALUE_COLUMN: &str = "Sales";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Where the finished chart goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Interactive window, blocks until closed.
    #[default]
    Window,
    /// SVG export, optionally opened with the system viewer afterwards.
    File { path: PathBuf, open: bool },
    /// Console output only.
    Skip,
}

/// Everything one report run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub file: PathBuf,
    pub group_column: String,
    pub value_column: String,
    pub output: OutputTarget,
    pub preview_rows: usize,
    pub summary_json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILE, DEFAULT_GROUP_COLUMN, DEFAULT_VALUE_COLUMN)
    }
}

impl ReportConfig {
    pub fn new(
        file: impl Into<PathBuf>,
        group_column: impl Into<String>,
        value_column: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            group_column: group_column.into(),
            value_column: value_column.into(),
            output: OutputTarget::Window,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            summary_json: false,
        }
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    pub fn with_summary_json(mut self, enabled: bool) -> Self {
        self.summary_json = enabled;
        self
    }
}

/// Sum a numeric column per category and chart the totals
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// CSV file to analyze (header row required)
    #[arg(env = "SALES_CHART_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Category column to group by
    #[arg(short, long = "group-by", env = "SALES_CHART_GROUP_BY", default_value = DEFAULT_GROUP_COLUMN)]
    pub group_by: String,

    /// Numeric column to sum
    #[arg(short, long, env = "SALES_CHART_VALUE", default_value = DEFAULT_VALUE_COLUMN)]
    pub value: String,

    /// Write the chart to this .svg file instead of opening a window
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Open the written chart with the system default viewer
    #[arg(long, requires = "output")]
    pub open: bool,

    /// Print the summary without drawing a chart
    #[arg(long, conflicts_with = "output")]
    pub no_chart: bool,

    /// Number of rows to preview after loading
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview: usize,

    /// Also print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<Args> for ReportConfig {
    fn from(args: Args) -> Self {
        let output = match (args.output, args.no_chart) {
            (Some(path), _) => OutputTarget::File {
                path,
                open: args.open,
            },
            (None, true) => OutputTarget::Skip,
            (None, false) => OutputTarget::Window,
        };

        ReportConfig::new(args.file, args.group_by, args.value)
            .with_output(output)
            .with_preview_rows(args.preview)
            .with_summary_json(args.json)
    }
}
