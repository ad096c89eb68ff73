use std::sync::Arc;

use crate::dataset::Dataset;

/// Read-only state shared by every connection task.
#[derive(Debug)]
pub struct ServerState {
    pub(crate) dataset: Arc<Dataset>,
    pub(crate) default_threshold_ms: f64,
    pub(crate) cors_origin: String,
}

impl ServerState {
    #[must_use]
    pub const fn new(
        dataset: Arc<Dataset>,
        default_threshold_ms: f64,
        cors_origin: String,
    ) -> Self {
        Self {
            dataset,
            default_threshold_ms,
            cors_origin,
        }
    }
}
