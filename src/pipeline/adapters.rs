//! Adapters that let plain closures act as processing steps.

use std::fmt;

use crate::error::ChainError;
use crate::pipeline::types::Processable;

/// A processing step built from two closures.
///
/// `can_handle` and `process` are called as given; no wrapping logic.
pub struct FunctionalProcessor<C, P> {
    can_handle: C,
    process: P,
    name: Option<String>,
}

impl<C, P> FunctionalProcessor<C, P> {
    pub fn new<T>(can_handle: C, process: P) -> Self
    where
        C: Fn(&T) -> bool,
        P: Fn(T) -> Result<T, ChainError>,
    {
        Self {
            can_handle,
            process,
            name: None,
        }
    }

    /// Attach a name used in log output.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The stored predicate.
    pub fn can_handle_fn(&self) -> &C {
        &self.can_handle
    }

    /// The stored transform.
    pub fn process_fn(&self) -> &P {
        &self.process
    }
}

impl<T, C, P> Processable<T> for FunctionalProcessor<C, P>
where
    C: Fn(&T) -> bool + Send + Sync,
    P: Fn(T) -> Result<T, ChainError> + Send + Sync,
{
    fn can_handle(&self, item: &T) -> bool {
        (self.can_handle)(item)
    }

    fn process(&self, item: T) -> Result<T, ChainError> {
        (self.process)(item)
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("functional")
    }
}

impl<C, P> fmt::Debug for FunctionalProcessor<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionalProcessor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
