//! Event publishing/subscription abstraction (mechanics only).
//!
//! This module provides the **event bus pattern**: an in-process pub/sub relay
//! from command handlers (producers) to side-effect subscribers (notifications,
//! audit, search indexing, ...).
//!
//! ## Delivery semantics
//!
//! - **Synchronous, ordered fan-out**: `publish()` runs every subscriber
//!   registered for the event's type, in registration order, before returning.
//! - **Append-only log**: every published event is recorded, whether or not
//!   anybody subscribed to it (audit/debug).
//! - **Best-effort side channel**: a failing subscriber is reported in the
//!   returned [`PublishReport`] and logged, but it does not stop the remaining
//!   subscribers and it does not fail the publisher. The state change the event
//!   describes is already committed when `publish()` is called, so there is
//!   nothing left to abort.
//! - **No persistence, no retries**: the log lives as long as the bus does.

use std::sync::Arc;

use crate::{Event, EventSubscriber, SubscriberError};

/// One subscriber failure observed during a publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberFailure {
    pub subscriber: String,
    pub error: SubscriberError,
}

/// Outcome of a single `publish()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub event_type: &'static str,
    /// Subscribers that handled the event successfully.
    pub delivered: usize,
    pub failures: Vec<SubscriberFailure>,
}

impl PublishReport {
    pub fn new(event_type: &'static str) -> Self {
        Self {
            event_type,
            delivered: 0,
            failures: Vec::new(),
        }
    }

    /// Every subscriber handled the event.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of subscribers that were invoked.
    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }
}

/// Domain-agnostic in-process event bus (pub/sub abstraction).
///
/// ```text
/// Command → Repository (save) → Event Bus (publish) → Subscribers
///                                      │                ├─ notifications
///                                      └─ event log     └─ audit
/// ```
///
/// ## Thread Safety
///
/// The trait requires `Send + Sync`; implementations must be safe to share
/// across the request handlers of a multi-threaded server.
pub trait EventBus<E: Event>: Send + Sync {
    /// Record the event, then run its subscribers.
    fn publish(&self, event: E) -> PublishReport;

    /// Register a subscriber for `event_type`. There is no unsubscribe.
    fn subscribe(&self, event_type: &str, subscriber: Arc<dyn EventSubscriber<E>>);

    /// Snapshot of everything published so far, in publish order.
    fn event_log(&self) -> Vec<E>;

    fn clear_event_log(&self);
}

impl<E, B> EventBus<E> for Arc<B>
where
    E: Event,
    B: EventBus<E> + ?Sized,
{
    fn publish(&self, event: E) -> PublishReport {
        (**self).publish(event)
    }

    fn subscribe(&self, event_type: &str, subscriber: Arc<dyn EventSubscriber<E>>) {
        (**self).subscribe(event_type, subscriber)
    }

    fn event_log(&self) -> Vec<E> {
        (**self).event_log()
    }

    fn clear_event_log(&self) {
        (**self).clear_event_log()
    }
}
