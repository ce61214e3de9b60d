//! plummy — event parsing and handler chains for serverless handlers.

pub mod config;
pub mod error;
pub mod event;
pub mod parsers;
pub mod pipeline;

pub use error::{ChainError, Error, Result};
pub use parsers::{
    ParsedGatewayRequest, ParsedQueueRecord, parse_gateway_event, parse_queue_event,
};
pub use pipeline::{FunctionalProcessor, Handler, Processable, StepHandler, build_chain};
