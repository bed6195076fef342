//! Scan-pass reporting: aggregation into a summary and JSON persistence.

pub mod aggregator;
pub mod writer;

pub use aggregator::{aggregate, Report};
pub use writer::write_report;
