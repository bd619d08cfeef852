//! Measurement-log discovery.
//!
//! A path argument may name a directory of logs or a single log file. Log
//! files follow the `<payload-bytes>Bytes.csv` naming convention; everything
//! else is ignored. Discovered logs are ordered by their payload size, never
//! by the filesystem listing order.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectorError {
    /// The path argument does not exist.
    #[error("path '{0}' does not exist")]
    MissingPath(PathBuf),

    /// A single-file argument does not follow the log naming convention, so
    /// its payload size cannot be inferred.
    #[error("'{0}' does not match the <bytes>Bytes.csv naming convention")]
    NotALog(PathBuf),

    /// Directory listing failed.
    #[error("failed to list '{path}': {source}")]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One discovered measurement log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyLog {
    pub path: PathBuf,
    /// Payload size parsed from the file name.
    pub payload_bytes: u64,
}

/// The logs selected under one path argument, plus where its results go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Matching logs, ascending by payload size.
    pub logs: Vec<LatencyLog>,
    /// Directory the results file is written into.
    pub results_dir: PathBuf,
}

/// Parse the payload size out of a log file name.
///
/// Accepts one or more ASCII digits followed by the literal `Bytes.csv`;
/// anything else (including a bare `Bytes.csv`) is rejected. Matching is
/// case-sensitive.
pub fn payload_bytes(file_name: &str) -> Option<u64> {
    let digits = file_name.strip_suffix("Bytes.csv")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Discover the logs under one path argument.
///
/// A directory yields every matching entry it contains, sorted ascending by
/// payload size. A file yields itself, provided its name matches the log
/// naming convention. The results directory is the directory itself, or the
/// file's parent.
pub fn select(path: &Path) -> Result<Selection, SelectorError> {
    if !path.exists() {
        return Err(SelectorError::MissingPath(path.to_path_buf()));
    }

    if path.is_dir() {
        select_from_dir(path)
    } else {
        select_single_file(path)
    }
}

fn select_from_dir(dir: &Path) -> Result<Selection, SelectorError> {
    let list_err = |source| SelectorError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut logs = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let name = entry.file_name();
        if let Some(bytes) = name.to_str().and_then(payload_bytes) {
            logs.push(LatencyLog {
                path: entry.path(),
                payload_bytes: bytes,
            });
        }
    }

    // Natural sort: 64Bytes.csv comes before 128Bytes.csv.
    logs.sort_by_key(|log| log.payload_bytes);

    Ok(Selection {
        logs,
        results_dir: dir.to_path_buf(),
    })
}

fn select_single_file(file: &Path) -> Result<Selection, SelectorError> {
    let bytes = file
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(payload_bytes)
        .ok_or_else(|| SelectorError::NotALog(file.to_path_buf()))?;

    let results_dir = match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(Selection {
        logs: vec![LatencyLog {
            path: file.to_path_buf(),
            payload_bytes: bytes,
        }],
        results_dir,
    })
}
