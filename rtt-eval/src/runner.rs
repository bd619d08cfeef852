//! Batch driver: one pass over each path argument.
//!
//! Processing order is deterministic: logs ascend by payload size within a
//! path, and paths run in the order given on the command line. A failure in
//! one log never aborts the batch; it is reported and the run moves on.

use std::fs::File;
use std::path::{Path, PathBuf};

use colored::Colorize;
use thiserror::Error;

use rtt_eval_core::report::{ReportError, ReportSink, StatsRecord};
use rtt_eval_core::stats::{LatencySummary, StatsError};
use rtt_eval_core::trace::{extract_durations, read_rows, TraceError};

use crate::config::Config;
use crate::report::ResultsWriter;
use crate::selector::{self, LatencyLog};

/// Errors that abort processing of the current path argument.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The report stream failed; further rows for this path cannot be
    /// written.
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

/// Errors local to a single log file. The batch continues past these.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file '{0}' does not exist")]
    Missing(PathBuf),

    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// What happened while processing one path argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathOutcome {
    /// Logs whose statistics made it into the report.
    pub processed: usize,
    /// Logs skipped with a per-file error.
    pub failed: usize,
}

impl PathOutcome {
    pub fn absorb(&mut self, other: PathOutcome) {
        self.processed += other.processed;
        self.failed += other.failed;
    }
}

/// Process one top-level path argument, writing its report as logs complete.
///
/// An unusable path (missing, or a file that is not a measurement log) is
/// reported to stderr and yields an empty outcome. Per-file failures are
/// likewise reported and counted, and the remaining logs still run.
pub fn process_path(
    path: &Path,
    config: &Config,
    verbose: bool,
) -> Result<PathOutcome, RunnerError> {
    let selection = match selector::select(path) {
        Ok(selection) => selection,
        Err(err) => {
            eprintln!("{} {}", "skipping:".yellow(), err);
            return Ok(PathOutcome::default());
        }
    };

    if selection.logs.is_empty() {
        eprintln!(
            "{} no measurement logs found under '{}'",
            "note:".yellow(),
            path.display()
        );
    }

    let mut writer = ResultsWriter::create(&selection.results_dir, &config.report.file_name)?;
    if verbose {
        eprintln!("writing results to {}", writer.path().display());
    }
    writer.write_header()?;

    let cap = config.extraction.sample_cap();
    let mut outcome = PathOutcome::default();
    for log in &selection.logs {
        match process_log(log, cap) {
            Ok(record) => {
                if verbose {
                    eprintln!(
                        "{}: {} samples",
                        log.path.display(),
                        record.summary.sample_count
                    );
                }
                writer.write_record(&record)?;
                outcome.processed += 1;
            }
            Err(err) => {
                eprintln!("{} {}: {}", "error:".red(), log.path.display(), err);
                outcome.failed += 1;
            }
        }
    }

    Ok(outcome)
}

/// Run one log through the pipeline: load rows, extract durations,
/// summarize.
fn process_log(log: &LatencyLog, cap: Option<usize>) -> Result<StatsRecord, FileError> {
    if !log.path.is_file() {
        return Err(FileError::Missing(log.path.clone()));
    }

    let file = File::open(&log.path).map_err(|source| FileError::Open {
        path: log.path.clone(),
        source,
    })?;

    let rows = read_rows(file)?;
    let durations = extract_durations(&rows, cap)?;
    let summary = LatencySummary::from_durations(&durations)?;

    Ok(StatsRecord {
        payload_bytes: log.payload_bytes,
        summary,
    })
}
