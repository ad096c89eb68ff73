#![no_main]

use libfuzzer_sys::fuzz_target;
use region_metrics::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = toml::from_str::<ConfigFile>(input) {
        if let Some(data) = config.data.as_ref() {
            for path in data {
                debug_assert!(path.len() <= input.len());
            }
        }
    }
});
