use std::path::{Path, PathBuf};

use crate::error::{LoadError, SchemaViolation};

/// Upper bound for an uptime percentage.
const MAX_UPTIME_PCT: f64 = 100.0;

/// Latencies must stay below this so the p95 converts to a `u64` exactly.
/// `u64::MAX` rounds up to 2^64 as an `f64`.
const LATENCY_LIMIT_MS: f64 = u64::MAX as f64;

/// One telemetry observation.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    region: String,
    latency: f64,
    uptime: f64,
}

impl TelemetryRecord {
    /// Builds a record, enforcing the canonical value ranges.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaViolation`] when the region is empty, the latency is
    /// negative, not finite or not below 2^64, or the uptime is outside
    /// `0..=100`.
    pub fn new(region: String, latency: f64, uptime: f64) -> Result<Self, SchemaViolation> {
        if region.is_empty() {
            return Err(SchemaViolation::InvalidRegion);
        }
        if !latency.is_finite() {
            return Err(SchemaViolation::NotANumber { field: "latency" });
        }
        if latency < 0.0 {
            return Err(SchemaViolation::NegativeLatency);
        }
        if latency >= LATENCY_LIMIT_MS {
            return Err(SchemaViolation::LatencyTooLarge);
        }
        if !uptime.is_finite() {
            return Err(SchemaViolation::NotANumber { field: "uptime" });
        }
        if !(0.0..=MAX_UPTIME_PCT).contains(&uptime) {
            return Err(SchemaViolation::UptimeOutOfRange);
        }
        Ok(Self {
            region,
            latency,
            uptime,
        })
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub const fn latency(&self) -> f64 {
        self.latency
    }

    #[must_use]
    pub const fn uptime(&self) -> f64 {
        self.uptime
    }
}

/// Ordered, non-empty, read-only collection of telemetry records.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryTable {
    records: Vec<TelemetryRecord>,
}

impl TelemetryTable {
    /// Wraps already validated records.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] when `records` is empty; `source` names
    /// the location the records came from.
    pub fn new(records: Vec<TelemetryRecord>, source: &Path) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Empty {
                path: source.to_path_buf(),
            });
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A constructed table is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn for_region<'table>(
        &'table self,
        region: &'table str,
    ) -> impl Iterator<Item = &'table TelemetryRecord> + 'table {
        self.records
            .iter()
            .filter(move |record| record.region == region)
    }
}

/// Outcome of the one-time startup load, shared read-only by every request.
#[derive(Debug)]
pub enum Dataset {
    Loaded {
        table: TelemetryTable,
        source: PathBuf,
    },
    Unavailable(LoadError),
}

impl Dataset {
    /// Runs the loader over `candidates` and logs the outcome. Never fails;
    /// a failed load is captured as [`Dataset::Unavailable`].
    #[must_use]
    pub fn load(candidates: &[PathBuf]) -> Self {
        match super::load(candidates) {
            Ok((table, source)) => {
                tracing::info!(
                    "Loaded {} telemetry records from {}",
                    table.len(),
                    source.display()
                );
                Self::Loaded { table, source }
            }
            Err(err) => {
                tracing::error!("Telemetry dataset unavailable: {}", err);
                Self::Unavailable(err)
            }
        }
    }

    #[must_use]
    pub const fn table(&self) -> Option<&TelemetryTable> {
        match self {
            Self::Loaded { table, .. } => Some(table),
            Self::Unavailable(_) => None,
        }
    }

    /// Consumes the dataset, yielding the table or the load failure.
    ///
    /// # Errors
    ///
    /// Returns the captured [`LoadError`] when the dataset is unavailable.
    pub fn into_table(self) -> Result<TelemetryTable, LoadError> {
        match self {
            Self::Loaded { table, .. } => Ok(table),
            Self::Unavailable(err) => Err(err),
        }
    }
}

impl From<TelemetryTable> for Dataset {
    fn from(table: TelemetryTable) -> Self {
        Self::Loaded {
            table,
            source: PathBuf::new(),
        }
    }
}
