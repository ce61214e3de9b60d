//! Typed records produced by the event parsers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One message from a queue-triggered event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQueueRecord {
    /// Originating queue identifier (e.g. an ARN). Opaque.
    pub source_identifier: String,
    /// The message payload, decoded from its JSON text.
    pub body: Map<String, Value>,
}

/// The single HTTP request carried by a gateway-triggered event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedGatewayRequest {
    pub http_method: String,
    pub path: String,
    /// Empty when the event carries no headers.
    pub headers: HashMap<String, String>,
    /// Empty when the event carries no body.
    pub body: Map<String, Value>,
}

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Field of each queue message holding its source identifier.
    pub source_field: String,
}

impl ParserConfig {
    pub const DEFAULT_SOURCE_FIELD: &'static str = "eventSourceARN";
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            source_field: Self::DEFAULT_SOURCE_FIELD.to_string(),
        }
    }
}

/// Decode a JSON text that must hold an object.
///
/// Arrays, scalars and invalid JSON all yield `None`.
pub(crate) fn decode_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
