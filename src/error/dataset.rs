use std::path::PathBuf;
use thiserror::Error;

/// Reasons the telemetry dataset could not be turned into a table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No telemetry dataset found (searched: {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },
    #[error("No telemetry dataset locations configured.")]
    NoCandidates,
    #[error("Failed to read dataset '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed dataset '{path}': {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Malformed dataset '{path}' at line {line}: {source}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Dataset '{path}' must be a JSON array of objects.")]
    NotAnArray { path: PathBuf },
    #[error("Dataset '{path}' record {index}: {reason}")]
    Schema {
        path: PathBuf,
        index: usize,
        reason: SchemaViolation,
    },
    #[error("Dataset '{path}' contains no records.")]
    Empty { path: PathBuf },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

/// A single record that does not fit the canonical schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("record is not an object")]
    NotAnObject,
    #[error("missing field '{field}'")]
    MissingField { field: &'static str },
    #[error("field 'region' must be a non-empty string")]
    InvalidRegion,
    #[error("field '{field}' must be a finite number")]
    NotANumber { field: &'static str },
    #[error("field 'latency' must be >= 0")]
    NegativeLatency,
    #[error("field 'latency' must be below 2^64")]
    LatencyTooLarge,
    #[error("field 'uptime' must be within 0..=100")]
    UptimeOutOfRange,
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
