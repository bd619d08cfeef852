use thiserror::Error;

use crate::stats::LatencySummary;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One report row: the statistics for a single payload-size log.
///
/// Immutable once computed, and written exactly once to the console and to
/// the results file.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRecord {
    /// Payload size in bytes, taken from the log file name.
    pub payload_bytes: u64,
    pub summary: LatencySummary,
}

/// Destination for the report header and rows.
///
/// Rows are handed over one at a time, as soon as they are computed, so
/// implementations can stream them out incrementally.
pub trait ReportSink {
    fn write_header(&mut self) -> Result<(), ReportError>;
    fn write_record(&mut self, record: &StatsRecord) -> Result<(), ReportError>;
}

mod table;
pub use table::{header_line, record_line};
