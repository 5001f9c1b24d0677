use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque JSON document payload.
///
/// The payload is carried as the raw text of the document and is never
/// parsed or normalised here, so two documents with the same meaning but
/// different spelling (key order, whitespace) compare unequal. An absent
/// document is expressed as `Option::<Jsonb>::None` or `Value::Null`, never
/// as an empty payload; `Jsonb::new("")` is a real, present document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jsonb {
    data: String,
}

impl Jsonb {
    pub fn new(data: impl Into<String>) -> Self {
        Jsonb { data: data.into() }
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

impl fmt::Display for Jsonb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl From<&str> for Jsonb {
    fn from(data: &str) -> Self {
        Jsonb::new(data)
    }
}

impl From<String> for Jsonb {
    fn from(data: String) -> Self {
        Jsonb { data }
    }
}

impl From<serde_json::Value> for Jsonb {
    fn from(value: serde_json::Value) -> Self {
        Jsonb { data: value.to_string() }
    }
}

/// Shorthand constructor mirroring the `Jsonb::new` path.
pub fn jsonb(data: impl Into<String>) -> Jsonb {
    Jsonb::new(data)
}
