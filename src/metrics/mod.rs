//! Per-region latency and uptime aggregation.
mod aggregate;
mod percentiles;
mod query;
mod types;


pub use aggregate::{aggregate, region_metrics, round_2dp};
pub use percentiles::{PERCENTILE_P95, lower_percentile, lower_rank};
pub use query::{DEFAULT_THRESHOLD_MS, MetricsQuery};
pub use types::{RegionMetrics, RegionReport};
