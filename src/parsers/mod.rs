//! Event parsers.
//!
//! Raw trigger payloads arrive as untyped JSON. The parsers turn them into
//! typed records and absorb malformed input instead of failing:
//! - queue events skip bad messages one at a time
//! - gateway events carry a single request, so any defect yields `None`
//!
//! Parsers never log; a skipped message is an expected outcome.

pub mod gateway;
pub mod queue;
pub mod types;

pub use gateway::parse_gateway_event;
pub use queue::{QueueRecords, parse_queue_event, parse_queue_event_with};
pub use types::{ParsedGatewayRequest, ParsedQueueRecord, ParserConfig};
