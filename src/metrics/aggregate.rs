use crate::dataset::TelemetryTable;

use super::percentiles::{PERCENTILE_P95, lower_percentile};
use super::types::{RegionMetrics, RegionReport};

/// Scale used to round averages to two decimal places.
const ROUNDING_SCALE: f64 = 100.0;

/// Computes metrics for every requested region, in request order.
///
/// Unknown regions get [`RegionMetrics::EMPTY`]; a repeated region keeps the
/// position of its first occurrence.
#[must_use]
pub fn aggregate(table: &TelemetryTable, regions: &[String], threshold_ms: f64) -> RegionReport {
    let mut report = RegionReport::with_capacity(regions.len());
    for region in regions {
        if report.contains(region) {
            continue;
        }
        let metrics = region_metrics(table, region, threshold_ms);
        report.insert(region.clone(), metrics);
    }
    report
}

/// Computes the four metrics for a single region.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "Latency and uptime means are computed in floating point"
)]
pub fn region_metrics(table: &TelemetryTable, region: &str, threshold_ms: f64) -> RegionMetrics {
    let mut latencies = Vec::new();
    let mut latency_sum = 0.0_f64;
    let mut uptime_sum = 0.0_f64;
    let mut breaches = 0_u64;

    for record in table.for_region(region) {
        latencies.push(record.latency());
        latency_sum += record.latency();
        uptime_sum += record.uptime();
        if record.latency() > threshold_ms {
            breaches = breaches.saturating_add(1);
        }
    }

    if latencies.is_empty() {
        return RegionMetrics::EMPTY;
    }

    latencies.sort_by(f64::total_cmp);
    let count = latencies.len() as f64;
    // `as` truncates toward zero, matching integer conversion of the sample.
    let p95_latency = lower_percentile(&latencies, PERCENTILE_P95).map(|value| value as u64);

    RegionMetrics {
        avg_latency: Some(round_2dp(latency_sum / count)),
        p95_latency,
        avg_uptime: Some(round_2dp(uptime_sum / count)),
        breaches,
    }
}

/// Rounds half to even at two decimal places. Values too large to scale are
/// returned unchanged; they carry no fractional digits anyway.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "Rounding scales the value by a power of ten"
)]
pub fn round_2dp(value: f64) -> f64 {
    let scaled = value * ROUNDING_SCALE;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / ROUNDING_SCALE
}
