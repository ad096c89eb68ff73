use std::path::Path;

use crate::dataset::{TelemetryTable, parse_records};
use crate::error::{AppResult, LoadError};
use crate::metrics::{DEFAULT_THRESHOLD_MS, MetricsQuery, RegionReport};

/// Label used as the source path of fuzzed datasets.
const FUZZ_SOURCE: &str = "fuzz-input.json";

/// Parses a dataset given as a JSON array.
///
/// # Errors
///
/// Returns an error when the input is not a non-empty array of valid records.
pub fn parse_dataset_input(input: &str) -> Result<TelemetryTable, LoadError> {
    parse_records(input, Path::new(FUZZ_SOURCE))
}

/// Decodes a request body with the default threshold.
///
/// # Errors
///
/// Returns an error when the body is not a valid metrics request.
pub fn decode_query_input(body: &[u8]) -> AppResult<MetricsQuery> {
    Ok(MetricsQuery::from_body(body, DEFAULT_THRESHOLD_MS as f64)?)
}

/// Runs a full request against a fuzzed dataset.
///
/// # Errors
///
/// Returns an error when either the dataset or the body is rejected.
pub fn query_dataset_input(dataset: &str, body: &[u8]) -> AppResult<RegionReport> {
    let table = parse_dataset_input(dataset)?;
    let query = decode_query_input(body)?;
    Ok(query.run(&table))
}
