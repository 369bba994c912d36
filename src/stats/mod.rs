//! Stats module - Grouped totals

mod aggregator;

pub use aggregator::{Aggregator, GroupSummary, GroupTotal};
