//! Report output: console plus the per-path results file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rtt_eval_core::report::{header_line, record_line, ReportError, ReportSink, StatsRecord};

/// Writes the report to stdout and a results file at the same time.
///
/// The results file is created (truncated) once per top-level path argument
/// and rows are appended as they are computed, so rows already written
/// survive a later per-file failure. Console output is flushed per row to
/// allow live monitoring of a long batch.
pub struct ResultsWriter {
    file: BufWriter<File>,
    path: PathBuf,
}

impl ResultsWriter {
    /// Create (or truncate) the results file inside `results_dir`.
    pub fn create(results_dir: &Path, file_name: &str) -> Result<Self, ReportError> {
        let path = results_dir.join(file_name);
        let file = File::create(&path)?;
        Ok(Self {
            file: BufWriter::new(file),
            path,
        })
    }

    /// Where the results file lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn emit(&mut self, line: &str) -> Result<(), ReportError> {
        let stdout = io::stdout();
        let mut console = stdout.lock();
        writeln!(console, "{line}")?;
        console.flush()?;

        writeln!(self.file, "{line}")?;
        self.file.flush()?;
        Ok(())
    }
}

impl ReportSink for ResultsWriter {
    fn write_header(&mut self) -> Result<(), ReportError> {
        self.emit(header_line())
    }

    fn write_record(&mut self, record: &StatsRecord) -> Result<(), ReportError> {
        self.emit(&record_line(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtt_eval_core::stats::LatencySummary;
    use tempfile::tempdir;

    fn make_record() -> StatsRecord {
        StatsRecord {
            payload_bytes: 64,
            summary: LatencySummary {
                sample_count: 2,
                std_dev: 0.5,
                mean: 100.5,
                min: 100.0,
                p50: 101.0,
                p90: 101.0,
                p99: 101.0,
                p99_9: 101.0,
                max: 101.0,
            },
        }
    }

    #[test]
    fn test_results_file_content() {
        let dir = tempdir().unwrap();

        {
            let mut writer = ResultsWriter::create(dir.path(), "results").unwrap();
            writer.write_header().unwrap();
            writer.write_record(&make_record()).unwrap();
        }

        let content = std::fs::read_to_string(dir.path().join("results")).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(header_line()));
        assert_eq!(lines.next(), Some(record_line(&make_record()).as_str()));
        assert_eq!(lines.next(), None);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_create_truncates_previous_results() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("results"), "stale content\n").unwrap();

        {
            let mut writer = ResultsWriter::create(dir.path(), "results").unwrap();
            writer.write_header().unwrap();
        }

        let content = std::fs::read_to_string(dir.path().join("results")).unwrap();
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_rows_are_durable_before_writer_is_dropped() {
        let dir = tempdir().unwrap();
        let mut writer = ResultsWriter::create(dir.path(), "results").unwrap();
        writer.write_header().unwrap();
        writer.write_record(&make_record()).unwrap();

        // Flushed per row: the file already holds both lines while the
        // writer is still open.
        let content = std::fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
