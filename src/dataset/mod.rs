//! Telemetry dataset loading.
//!
//! The dataset is read once at startup. Loading is all-or-nothing: callers
//! either get a fully validated [`TelemetryTable`] or a [`LoadError`] that
//! explains why the data is unavailable.
mod loader;
mod normalize;
mod record;


pub use loader::{DEFAULT_DATA_PATHS, load, load_file, parse_records};
pub use record::{Dataset, TelemetryRecord, TelemetryTable};

pub use crate::error::LoadError;
