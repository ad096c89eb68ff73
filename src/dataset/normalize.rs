use serde_json::{Map, Value};

use crate::error::SchemaViolation;

use super::record::TelemetryRecord;

/// Source column names folded onto the canonical schema after lower-casing.
const FIELD_ALIASES: [(&str, Field); 2] = [
    ("latency_ms", Field::Latency),
    ("uptime_pct", Field::Uptime),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Region,
    Latency,
    Uptime,
}

impl Field {
    const fn name(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Latency => "latency",
            Self::Uptime => "uptime",
        }
    }
}

/// Resolves a raw key to its canonical field. The flag is `true` when the
/// key already used the canonical name.
fn classify(key: &str) -> Option<(Field, bool)> {
    let key = key.to_ascii_lowercase();
    match key.as_str() {
        "region" => Some((Field::Region, true)),
        "latency" => Some((Field::Latency, true)),
        "uptime" => Some((Field::Uptime, true)),
        other => FIELD_ALIASES
            .iter()
            .find(|(alias, _)| *alias == other)
            .map(|(_, field)| (*field, false)),
    }
}

#[derive(Default)]
struct Slots<'raw> {
    region: Option<(&'raw Value, bool)>,
    latency: Option<(&'raw Value, bool)>,
    uptime: Option<(&'raw Value, bool)>,
}

impl<'raw> Slots<'raw> {
    fn from_object(object: &'raw Map<String, Value>) -> Self {
        let mut slots = Self::default();
        for (key, value) in object {
            let Some((field, canonical)) = classify(key) else {
                continue;
            };
            let slot = match field {
                Field::Region => &mut slots.region,
                Field::Latency => &mut slots.latency,
                Field::Uptime => &mut slots.uptime,
            };
            // Canonical names win over aliases regardless of key order.
            let occupied_by_canonical = matches!(slot, Some((_, true)));
            if canonical || !occupied_by_canonical {
                *slot = Some((value, canonical));
            }
        }
        slots
    }
}

fn required(slot: Option<(&Value, bool)>, field: Field) -> Result<&Value, SchemaViolation> {
    match slot {
        Some((Value::Null, _)) | None => Err(SchemaViolation::MissingField {
            field: field.name(),
        }),
        Some((value, _)) => Ok(value),
    }
}

fn number(slot: Option<(&Value, bool)>, field: Field) -> Result<f64, SchemaViolation> {
    required(slot, field)?
        .as_f64()
        .ok_or(SchemaViolation::NotANumber {
            field: field.name(),
        })
}

/// Converts one raw JSON record into a validated [`TelemetryRecord`].
pub(super) fn record_from_value(value: &Value) -> Result<TelemetryRecord, SchemaViolation> {
    let Value::Object(object) = value else {
        return Err(SchemaViolation::NotAnObject);
    };
    let slots = Slots::from_object(object);

    let region = match required(slots.region, Field::Region)? {
        Value::String(region) => region.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
            return Err(SchemaViolation::InvalidRegion);
        }
    };
    let latency = number(slots.latency, Field::Latency)?;
    let uptime = number(slots.uptime, Field::Uptime)?;

    TelemetryRecord::new(region, latency, uptime)
}
