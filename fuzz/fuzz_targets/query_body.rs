#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let parsed: Option<serde_json::Value> = serde_json::from_slice(data).ok();
    if let Ok(query) = region_metrics::fuzzing::decode_query_input(data) {
        debug_assert!(parsed.as_ref().is_some_and(serde_json::Value::is_object));
        debug_assert!(!query.threshold_ms.is_nan());
    }
});
