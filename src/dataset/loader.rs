use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::LoadError;

use super::normalize::record_from_value;
use super::record::{TelemetryRecord, TelemetryTable};

/// Locations searched, in order, when no dataset path is configured.
pub const DEFAULT_DATA_PATHS: [&str; 2] = ["data/telemetry.json", "telemetry.json"];

/// Loads the first candidate that yields a well-formed table.
///
/// Missing files are skipped silently. Files that exist but fail to load are
/// logged and skipped; if nothing loads, the first such failure is returned
/// in preference to [`LoadError::NotFound`].
///
/// # Errors
///
/// Returns a [`LoadError`] when no candidate produces a table.
pub fn load(candidates: &[PathBuf]) -> Result<(TelemetryTable, PathBuf), LoadError> {
    if candidates.is_empty() {
        return Err(LoadError::NoCandidates);
    }

    let mut first_failure: Option<LoadError> = None;
    for path in candidates {
        match load_file(path) {
            Ok(table) => return Ok((table, path.clone())),
            Err(LoadError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!("Dataset candidate {} not found", path.display());
            }
            Err(err) => {
                tracing::warn!("Skipping dataset candidate {}: {}", path.display(), err);
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
        }
    }

    Err(first_failure.unwrap_or_else(|| LoadError::NotFound {
        searched: candidates.to_vec(),
    }))
}

/// Reads and parses a single dataset file.
///
/// Files ending in `.jsonl` or `.ndjson` are read as one object per line;
/// anything else must be a JSON array of objects.
///
/// # Errors
///
/// Returns a [`LoadError`] when the file cannot be read or does not hold a
/// non-empty, well-formed set of records.
pub fn load_file(path: &Path) -> Result<TelemetryTable, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|err| LoadError::Read {
        path: path.to_path_buf(),
        source: err,
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("jsonl" | "ndjson") => parse_json_lines(&content, path),
        Some(_) | None => parse_records(&content, path),
    }
}

/// Parses a JSON array of telemetry objects.
///
/// # Errors
///
/// Returns a [`LoadError`] when the content is not a JSON array of valid
/// records or the array is empty.
pub fn parse_records(content: &str, path: &Path) -> Result<TelemetryTable, LoadError> {
    let value: Value = serde_json::from_str(content).map_err(|err| LoadError::Malformed {
        path: path.to_path_buf(),
        source: err,
    })?;
    let Value::Array(items) = value else {
        return Err(LoadError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        records.push(to_record(item, index, path)?);
    }
    TelemetryTable::new(records, path)
}

fn parse_json_lines(content: &str, path: &Path) -> Result<TelemetryTable, LoadError> {
    let mut records = Vec::new();
    for (line_index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|err| LoadError::MalformedLine {
            path: path.to_path_buf(),
            line: line_index.saturating_add(1),
            source: err,
        })?;
        let index = records.len();
        records.push(to_record(&value, index, path)?);
    }
    TelemetryTable::new(records, path)
}

fn to_record(value: &Value, index: usize, path: &Path) -> Result<TelemetryRecord, LoadError> {
    record_from_value(value).map_err(|reason| LoadError::Schema {
        path: path.to_path_buf(),
        index,
        reason,
    })
}
