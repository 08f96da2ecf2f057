//! Domain records managed through the `/domains` endpoints
//!
//! Beyond `id` and `name` this layer treats domain fields as opaque: unknown
//! backend fields are captured in `extra` so they round-trip unchanged
//! through update calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A subscriber domain as exchanged with the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Backend-assigned identifier; absent on records not yet created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DomainRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), extra: Map::new() }
    }
}
