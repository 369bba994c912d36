//! GUI module - Chart window

mod app;

pub use app::{ChartWindow, SalesChartApp};
