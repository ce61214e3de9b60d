//! Handler chain.
//!
//! A parsed record is passed to the head of a chain of [`StepHandler`]s:
//! 1. each node asks its processor `can_handle(item)`
//! 2. if true, the item is replaced by `process(item)`
//! 3. the (possibly new) item is forwarded to the next node
//!
//! The terminal node returns the item, which travels back up unchanged.
//! Processor errors are never caught by the chain.

pub mod adapters;
pub mod handlers;
pub mod types;

pub use adapters::FunctionalProcessor;
pub use handlers::{Handler, StepHandler, build_chain};
pub use types::Processable;
