//! Core types and routines for rtt-eval.
//!
//! This crate holds the measurement-log model, the sample-extraction
//! algorithm, and the statistics and report types shared by the rtt-eval CLI.

pub mod report;
pub mod stats;
pub mod trace;

// Re-export main types for convenience
pub use report::{header_line, record_line, ReportError, ReportSink, StatsRecord};
pub use stats::{LatencySummary, StatsError};
pub use trace::{extract_durations, read_rows, MeasurementRow, TraceError};
