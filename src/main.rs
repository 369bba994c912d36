//! Sales Chart - CSV Sales Aggregation & Bar Chart Report
//!
//! Sums a sales column per category and shows the totals as a bar chart.

use clap::Parser;
use env_logger::Env;
use log::debug;
use sales_chart::config::Args;
use sales_chart::{pipeline, ReportConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = ReportConfig::from(Args::parse());
    debug!("report config: {:?}", config);

    let result = pipeline::run(&config, &mut std::io::stdout());
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) if !err.is_fatal() => {
            println!(
                "\nNothing to chart: no rows with a numeric '{}' value.",
                config.value_column
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("\nError: {err}");
            ExitCode::FAILURE
        }
    }
}
