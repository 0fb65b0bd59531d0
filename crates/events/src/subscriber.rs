//! Event subscribers (side-effect handlers attached to the bus).

use thiserror::Error;

/// Failure raised by a subscriber while handling a published event.
///
/// The bus never propagates this to the publisher: by the time an event is
/// published, the state change it describes has already been saved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SubscriberError(String);

impl SubscriberError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// A side-effect handler registered on an [`EventBus`](crate::EventBus) for one
/// event type.
pub trait EventSubscriber<E>: Send + Sync {
    /// Name used when reporting failures.
    fn name(&self) -> &str;

    fn handle(&self, event: &E) -> Result<(), SubscriberError>;
}

/// Subscriber backed by a closure.
pub struct FnSubscriber<F> {
    name: String,
    f: F,
}

impl<F> core::fmt::Debug for FnSubscriber<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnSubscriber").field("name", &self.name).finish()
    }
}

/// Wrap a closure as a named subscriber.
pub fn from_fn<E, F>(name: impl Into<String>, f: F) -> FnSubscriber<F>
where
    F: Fn(&E) -> Result<(), SubscriberError> + Send + Sync,
{
    FnSubscriber {
        name: name.into(),
        f,
    }
}

impl<E, F> EventSubscriber<E> for FnSubscriber<F>
where
    F: Fn(&E) -> Result<(), SubscriberError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, event: &E) -> Result<(), SubscriberError> {
        (self.f)(event)
    }
}
