//! Measurement-log rows and RTT sample extraction.
//!
//! A log is a headerless CSV of `(time, indicator)` rows captured during a
//! ping-pong latency test. Leading rows with a zero indicator are pre-test
//! noise; after the first send event, consecutive row pairs bracket one
//! round trip each.

use std::io::Read;

use thiserror::Error;

/// Errors raised while loading or pairing measurement rows.
#[derive(Debug, Error)]
pub enum TraceError {
    /// A row did not have exactly two columns.
    #[error("row {line} has {found} columns, expected 2 (time, indicator)")]
    ColumnCount { line: u64, found: usize },

    /// A field could not be parsed as a number.
    #[error("row {line}: '{value}' is not a number")]
    InvalidNumber { line: u64, value: String },

    /// The underlying CSV reader failed.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The indicator column never became nonzero, so no round trip can be
    /// located in the log.
    #[error("no send event found (indicator column is all zeros)")]
    NoSendEvent,
}

/// One parsed measurement-log row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRow {
    /// Capture time in seconds, monotonically increasing within a log.
    pub time_s: f64,
    /// Nonzero only on the row marking the start of a send event.
    pub indicator: f64,
}

/// Load measurement rows from headerless CSV input.
///
/// Whitespace after commas is tolerated. Rows with a column count other than
/// two, or with non-numeric fields, are rejected.
pub fn read_rows<R: Read>(input: R) -> Result<Vec<MeasurementRow>, TraceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = index as u64 + 1;
        if record.len() != 2 {
            return Err(TraceError::ColumnCount {
                line,
                found: record.len(),
            });
        }
        rows.push(MeasurementRow {
            time_s: parse_field(&record[0], line)?,
            indicator: parse_field(&record[1], line)?,
        });
    }

    Ok(rows)
}

fn parse_field(field: &str, line: u64) -> Result<f64, TraceError> {
    field.parse().map_err(|_| TraceError::InvalidNumber {
        line,
        value: field.to_string(),
    })
}

/// Pair post-warm-up rows into round-trip duration samples in microseconds.
///
/// Rows before the first nonzero indicator are skipped, and the first
/// complete pair after that boundary is dropped as well to avoid cold-start
/// bias. The remaining rows are squashed two at a time, each non-overlapping
/// pair yielding `(t[i+1] - t[i]) * 1e6` rounded to the nearest microsecond.
/// Pairing stops when fewer than two rows remain or, when a cap is given,
/// once `max_samples` samples have been collected.
pub fn extract_durations(
    rows: &[MeasurementRow],
    max_samples: Option<usize>,
) -> Result<Vec<f64>, TraceError> {
    let boundary = rows
        .iter()
        .position(|row| row.indicator != 0.0)
        .ok_or(TraceError::NoSendEvent)?;

    // Drop the first measurement after the warm-up boundary.
    let start = boundary + 2;

    let mut durations = Vec::new();
    let mut i = start;
    while i + 1 < rows.len() {
        if max_samples.is_some_and(|cap| durations.len() >= cap) {
            break;
        }
        let micros = (rows[i + 1].time_s - rows[i].time_s) * 1_000_000.0;
        durations.push(micros.round());
        i += 2;
    }

    Ok(durations)
}
