//! Sales Chart - CSV Sales Aggregation & Bar Chart Report
//!
//! Loads one CSV file, sums a numeric column per category and charts the
//! totals, largest first.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod gui;
pub mod pipeline;
pub mod stats;

pub use config::{OutputTarget, ReportConfig};
pub use error::ReportError;
pub use stats::{GroupSummary, GroupTotal};
