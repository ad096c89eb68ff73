#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, Vec<u8>)| {
    let (dataset, body) = input;
    let Ok(report) = region_metrics::fuzzing::query_dataset_input(&dataset, &body) else {
        return;
    };
    for (_, metrics) in report.iter() {
        match (metrics.avg_latency, metrics.p95_latency, metrics.avg_uptime) {
            (None, None, None) => debug_assert_eq!(metrics.breaches, 0),
            (Some(avg_latency), Some(_), Some(avg_uptime)) => {
                debug_assert!(avg_latency >= 0.0);
                debug_assert!((0.0..=100.0).contains(&avg_uptime));
            }
            _ => debug_assert!(false, "metrics must be all null or all present"),
        }
    }
    let again = region_metrics::fuzzing::query_dataset_input(&dataset, &body);
    debug_assert!(again.is_ok_and(|second| second == report));
});
