use serde::Deserialize;
use serde_json::Value;

/// Wire shape of one ingestion request.
///
/// Every field is optional on the wire: an absent string field comes
/// through empty and an absent `data` comes through as null. A present
/// field with the wrong type fails deserialization. The `data` payload
/// is opaque and stored verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub level: String,
    #[serde(default, rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub data: Value,
}
