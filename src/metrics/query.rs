use serde::Deserialize;
use serde_json::Value;

use crate::dataset::TelemetryTable;
use crate::error::InputError;

use super::aggregate::aggregate;
use super::types::RegionReport;

/// Threshold applied when a request does not name one.
pub const DEFAULT_THRESHOLD_MS: u64 = 180;

#[derive(Debug, Default, Deserialize)]
struct MetricsRequest {
    regions: Option<Vec<String>>,
    threshold_ms: Option<f64>,
}

/// Regions to report on and the latency threshold that counts as a breach.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsQuery {
    pub regions: Vec<String>,
    pub threshold_ms: f64,
}

impl MetricsQuery {
    #[must_use]
    pub const fn new(regions: Vec<String>, threshold_ms: f64) -> Self {
        Self {
            regions,
            threshold_ms,
        }
    }

    /// Decodes a request body such as
    /// `{"regions": ["us-east-1"], "threshold_ms": 180}`.
    ///
    /// Missing or null `regions` means no regions; missing or null
    /// `threshold_ms` falls back to `default_threshold_ms`.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] when the body is not JSON, is not an object,
    /// or carries fields of the wrong type.
    pub fn from_body(body: &[u8], default_threshold_ms: f64) -> Result<Self, InputError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|err| InputError::InvalidJson { source: err })?;
        if !value.is_object() {
            return Err(InputError::NotAnObject);
        }
        let request = MetricsRequest::deserialize(value)
            .map_err(|err| InputError::InvalidShape { source: err })?;

        Ok(Self {
            regions: request.regions.unwrap_or_default(),
            threshold_ms: request.threshold_ms.unwrap_or(default_threshold_ms),
        })
    }

    #[must_use]
    pub fn run(&self, table: &TelemetryTable) -> RegionReport {
        aggregate(table, &self.regions, self.threshold_ms)
    }
}
