use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque item metadata, decoded defensively.
///
/// The backend stores this as free-form JSON and some writers persist it as
/// a JSON-encoded string. Decoding never fails: anything malformed or absent
/// collapses to the all-absent default, which downstream reads as "nothing
/// has happened to this item yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemMetadata {
    pub inspection_completed: bool,
    pub photography_completed: bool,
    pub photography_date: Option<DateTime<Utc>>,
}

impl ItemMetadata {
    /// Decode the raw `metadata` field of a backend record.
    ///
    /// Accepts a JSON object, a JSON-encoded string holding an object, or
    /// anything else (which decodes to the default). Unknown keys are
    /// ignored.
    pub fn decode(raw: Option<&Value>) -> Self {
        let Some(value) = raw else {
            return Self::default();
        };
        match value {
            Value::String(encoded) => serde_json::from_str(encoded).unwrap_or_default(),
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}
