//! rtt-eval: round-trip latency statistics from ping-pong measurement logs.
//!
//! This library provides the pieces behind the rtt-eval binary: measurement
//! log discovery, per-file processing, and report writing.

pub mod cli;
pub mod config;
pub mod report;
pub mod runner;
pub mod selector;

// Re-export core types for convenience
pub use rtt_eval_core::report::{header_line, record_line, ReportError, ReportSink, StatsRecord};
pub use rtt_eval_core::stats::{LatencySummary, StatsError};
pub use rtt_eval_core::trace::{extract_durations, read_rows, MeasurementRow, TraceError};

// Re-export main types from this crate
pub use cli::Cli;
pub use config::Config;
pub use report::ResultsWriter;
pub use runner::{process_path, FileError, PathOutcome, RunnerError};
pub use selector::{payload_bytes, select, LatencyLog, Selection, SelectorError};
