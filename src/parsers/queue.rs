//! Queue (SQS-shaped) event parser.
//!
//! Expected shape:
//! `{"Records": [{"eventSourceARN": "...", "body": "<json text>"}, ...]}`

use serde_json::Value;

use super::types::{ParsedQueueRecord, ParserConfig, decode_object};

/// Top-level key holding the message batch.
const RECORDS_KEY: &str = "Records";

/// Message key holding the JSON-encoded payload.
const BODY_KEY: &str = "body";

/// Lazily parse a queue event using the default source field.
///
/// Malformed messages are skipped; a non-queue event yields nothing.
pub fn parse_queue_event(event: &Value) -> QueueRecords<'_> {
    QueueRecords::new(event, ParserConfig::DEFAULT_SOURCE_FIELD)
}

/// Lazily parse a queue event, reading the source identifier from the
/// field named in `config`.
pub fn parse_queue_event_with<'a>(event: &'a Value, config: &'a ParserConfig) -> QueueRecords<'a> {
    QueueRecords::new(event, &config.source_field)
}

/// Iterator over the well-formed messages of a queue event, in batch order.
#[derive(Debug, Clone)]
pub struct QueueRecords<'a> {
    messages: std::slice::Iter<'a, Value>,
    source_field: &'a str,
}

impl<'a> QueueRecords<'a> {
    fn new(event: &'a Value, source_field: &'a str) -> Self {
        let messages = event
            .get(RECORDS_KEY)
            .and_then(Value::as_array)
            .map(|records| records.iter())
            .unwrap_or_default();
        Self {
            messages,
            source_field,
        }
    }
}

impl Iterator for QueueRecords<'_> {
    type Item = ParsedQueueRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let source_field = self.source_field;
        self.messages
            .by_ref()
            .find_map(|raw| parse_message(raw, source_field))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.messages.size_hint().1)
    }
}

/// Parse one raw message; `None` means it is skipped.
fn parse_message(raw: &Value, source_field: &str) -> Option<ParsedQueueRecord> {
    let source_identifier = raw.get(source_field)?.as_str()?;
    let body = decode_object(raw.get(BODY_KEY)?.as_str()?)?;
    Some(ParsedQueueRecord {
        source_identifier: source_identifier.to_string(),
        body,
    })
}
