use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_CORS_ORIGIN, DEFAULT_LISTEN, default_data_paths, default_threshold_ms,
};

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Aggregate once against the dataset and print the JSON report
    Query(QueryArgs),
}

#[derive(Debug, Args, Clone)]
pub struct QueryArgs {
    /// Region to report on (repeatable; output follows the given order)
    #[arg(long = "region", short = 'r')]
    pub regions: Vec<String>,

    /// Latency threshold in milliseconds (defaults to --default-threshold-ms)
    #[arg(long = "threshold-ms")]
    pub threshold_ms: Option<f64>,

    /// Pretty-print the JSON report
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Per-region latency and uptime aggregates over a static telemetry dataset, served over HTTP."
)]
pub struct ServerArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address the metrics endpoint listens on
    #[arg(
        long = "listen",
        short = 'l',
        env = "REGION_METRICS_LISTEN",
        default_value = DEFAULT_LISTEN
    )]
    pub listen: String,

    /// Dataset location to try, in priority order (repeatable)
    #[arg(long = "data", short = 'd', global = true)]
    pub data: Vec<PathBuf>,

    /// Threshold applied when a request omits threshold_ms
    #[arg(long = "default-threshold-ms", default_value_t = default_threshold_ms())]
    pub default_threshold_ms: u64,

    /// Value of the Access-Control-Allow-Origin header
    #[arg(long = "cors-origin", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    /// Path to config file (TOML/JSON)
    #[arg(long = "config", short = 'c', global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

impl ServerArgs {
    /// Dataset candidates in priority order, falling back to the defaults.
    #[must_use]
    pub fn data_candidates(&self) -> Vec<PathBuf> {
        if self.data.is_empty() {
            default_data_paths()
        } else {
            self.data.clone()
        }
    }
}
