use thiserror::Error;

/// A metrics request body that cannot be turned into a query.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid JSON body: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
    #[error("Request body must be a JSON object.")]
    NotAnObject,
    #[error("Invalid request body: {source}")]
    InvalidShape {
        #[source]
        source: serde_json::Error,
    },
}
