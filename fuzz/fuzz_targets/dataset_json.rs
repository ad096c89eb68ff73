#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(table) = region_metrics::fuzzing::parse_dataset_input(input) {
        debug_assert!(!table.is_empty());
        for record in table.records() {
            debug_assert!(!record.region().is_empty());
            debug_assert!(record.latency() >= 0.0);
            debug_assert!((0.0..=100.0).contains(&record.uptime()));
        }
    }
});
