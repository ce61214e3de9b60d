//! Shared traits for the handler chain.

use crate::error::ChainError;

/// A processing step: a predicate plus a transform.
///
/// Implemented by concrete processors, or by [`FunctionalProcessor`] for
/// inline closures. No state is retained between calls.
///
/// [`FunctionalProcessor`]: crate::pipeline::FunctionalProcessor
pub trait Processable<T>: Send + Sync {
    /// Whether this step applies to `item`.
    fn can_handle(&self, item: &T) -> bool;

    /// Transform `item`. The output replaces the input for the rest of the chain.
    fn process(&self, item: T) -> Result<T, ChainError>;

    /// Step name for logging.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
