use serde::Deserialize;

/// Settings accepted from `region-metrics.toml` / `region-metrics.json`.
/// Every field is optional; command-line values take precedence.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub listen: Option<String>,
    pub data: Option<Vec<String>>,
    pub default_threshold_ms: Option<u64>,
    pub cors_origin: Option<String>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
