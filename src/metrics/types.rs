use serde::Serialize;
use serde::ser::SerializeMap;

/// Aggregates for one region. All fields are null/zero together when the
/// region has no matching records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionMetrics {
    pub avg_latency: Option<f64>,
    pub p95_latency: Option<u64>,
    pub avg_uptime: Option<f64>,
    pub breaches: u64,
}

impl RegionMetrics {
    pub const EMPTY: Self = Self {
        avg_latency: None,
        p95_latency: None,
        avg_uptime: None,
        breaches: 0,
    };

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.avg_latency.is_none()
            && self.p95_latency.is_none()
            && self.avg_uptime.is_none()
            && self.breaches == 0
    }
}

/// Region -> metrics mapping that serializes as a JSON object in query
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionReport {
    entries: Vec<(String, RegionMetrics)>,
}

impl RegionReport {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn contains(&self, region: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == region)
    }

    #[must_use]
    pub fn get(&self, region: &str) -> Option<&RegionMetrics> {
        self.entries
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, metrics)| metrics)
    }

    /// Appends `region`, keeping the first entry if it is already present.
    pub fn insert(&mut self, region: String, metrics: RegionMetrics) {
        if !self.contains(&region) {
            self.entries.push((region, metrics));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionMetrics)> {
        self.entries
            .iter()
            .map(|(name, metrics)| (name.as_str(), metrics))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RegionReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (region, metrics) in &self.entries {
            map.serialize_entry(region, metrics)?;
        }
        map.end()
    }
}
