//! Raw event detection and loading.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{EventError, Result};

/// Which trigger produced a raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Queue,
    Gateway,
    Unknown,
}

impl EventKind {
    /// Classify a raw event by its top-level shape.
    ///
    /// An object with a `Records` array is a queue event; an object with an
    /// `httpMethod` key is a gateway event.
    pub fn detect(event: &Value) -> Self {
        let Some(object) = event.as_object() else {
            return Self::Unknown;
        };
        if object.get("Records").is_some_and(Value::is_array) {
            Self::Queue
        } else if object.contains_key("httpMethod") {
            Self::Gateway
        } else {
            Self::Unknown
        }
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::Gateway => "gateway",
            Self::Unknown => "unknown",
        }
    }
}

/// Load a raw event from a JSON file.
pub fn load_event(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| EventError::Read {
        source_name: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_text(&text)
}

/// Read a raw event from any reader (e.g. stdin).
pub fn read_event<R: Read>(mut reader: R) -> Result<Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(EventError::from)?;
    parse_text(&text)
}

fn parse_text(text: &str) -> Result<Value> {
    let value = serde_json::from_str(text).map_err(EventError::from)?;
    Ok(value)
}
