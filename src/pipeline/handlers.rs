//! Chain-of-responsibility handlers.

use std::fmt;

use tracing::debug;

use crate::error::ChainError;
use crate::pipeline::types::Processable;

/// A node in a handler chain.
pub trait Handler<T>: Send + Sync {
    /// Set (or replace) the next handler and return it, so chains can be
    /// assembled fluently: `head.set_next(b).set_next(c)`.
    fn set_next(&mut self, next: Box<dyn Handler<T>>) -> &mut dyn Handler<T>;

    /// Run `item` through this handler and everything after it.
    fn handle(&self, item: T) -> Result<T, ChainError>;
}

/// Handler wrapping exactly one processing step.
///
/// On `handle`, the predicate runs once; the transform runs at most once and
/// only when the predicate holds. The next handler, if any, is always called
/// exactly once with the current item and its result is returned as is.
pub struct StepHandler<T> {
    processor: Box<dyn Processable<T>>,
    next: Option<Box<dyn Handler<T>>>,
}

impl<T> StepHandler<T> {
    /// Create a terminal handler around `processor`.
    pub fn new<P>(processor: P) -> Self
    where
        P: Processable<T> + 'static,
    {
        Self::from_boxed(Box::new(processor))
    }

    /// Create a terminal handler around an already boxed processor.
    pub fn from_boxed(processor: Box<dyn Processable<T>>) -> Self {
        Self {
            processor,
            next: None,
        }
    }

    /// Builder form of [`Handler::set_next`].
    pub fn with_next<H>(mut self, next: H) -> Self
    where
        H: Handler<T> + 'static,
    {
        self.next = Some(Box::new(next));
        self
    }

    /// Whether a next handler is linked.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Name of the wrapped processor.
    pub fn processor_name(&self) -> &str {
        self.processor.name()
    }
}

impl<T> Handler<T> for StepHandler<T> {
    fn set_next(&mut self, next: Box<dyn Handler<T>>) -> &mut dyn Handler<T> {
        &mut **self.next.insert(next)
    }

    fn handle(&self, item: T) -> Result<T, ChainError> {
        let step = self.processor.name();

        let item = if self.processor.can_handle(&item) {
            debug!(step, "Step applies, processing item");
            self.processor.process(item)?
        } else {
            debug!(step, "Step does not apply, forwarding item unchanged");
            item
        };

        match &self.next {
            Some(next) => next.handle(item),
            None => {
                debug!(step, "End of chain reached");
                Ok(item)
            }
        }
    }
}

impl<T> fmt::Debug for StepHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepHandler")
            .field("processor", &self.processor.name())
            .field("has_next", &self.has_next())
            .finish()
    }
}

/// Link `processors` into a chain, in order, and return its head.
///
/// Returns `None` for an empty list.
pub fn build_chain<T, I>(processors: I) -> Option<StepHandler<T>>
where
    T: 'static,
    I: IntoIterator<Item = Box<dyn Processable<T>>>,
    I::IntoIter: DoubleEndedIterator,
{
    processors
        .into_iter()
        .rev()
        .fold(None, |next: Option<StepHandler<T>>, processor| {
            let handler = StepHandler::from_boxed(processor);
            Some(match next {
                Some(next) => handler.with_next(next),
                None => handler,
            })
        })
}
