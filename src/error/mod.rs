mod app;
mod config;
mod dataset;
mod query;
mod server;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use dataset::{LoadError, SchemaViolation};
pub use query::InputError;
pub use server::ServerError;
