use std::path::PathBuf;

use crate::dataset::DEFAULT_DATA_PATHS;
use crate::metrics::DEFAULT_THRESHOLD_MS;

pub(crate) const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
pub(crate) const DEFAULT_CORS_ORIGIN: &str = "*";

pub(crate) const fn default_threshold_ms() -> u64 {
    DEFAULT_THRESHOLD_MS
}

/// Dataset candidates used when neither the CLI nor the config names any.
pub(crate) fn default_data_paths() -> Vec<PathBuf> {
    DEFAULT_DATA_PATHS.iter().map(PathBuf::from).collect()
}
