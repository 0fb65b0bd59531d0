//! In-memory event bus (the only transport this service needs).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::bus::{EventBus, PublishReport, SubscriberFailure};
use crate::{Event, EventSubscriber};

type SubscriberList<E> = Vec<Arc<dyn EventSubscriber<E>>>;

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Synchronous fan-out in registration order
/// - Subscriber failures are isolated (see [`crate::bus`])
pub struct InMemoryEventBus<E> {
    log: Mutex<Vec<E>>,
    subscribers: RwLock<HashMap<String, SubscriberList<E>>>,
}

impl<E> InMemoryEventBus<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subscribers registered for `event_type`.
    pub fn subscriber_count(&self, event_type: &str) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_type)
            .map_or(0, Vec::len)
    }
}

impl<E> Default for InMemoryEventBus<E> {
    fn default() -> Self {
        Self {
            log: Mutex::new(Vec::new()),
            subscribers: RwLock::new(HashMap::new()),
        }
    }
}

impl<E> core::fmt::Debug for InMemoryEventBus<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let logged = self.log.lock().map(|l| l.len()).unwrap_or_default();
        let event_types = self
            .subscribers
            .read()
            .map(|s| s.len())
            .unwrap_or_default();
        f.debug_struct("InMemoryEventBus")
            .field("logged", &logged)
            .field("event_types", &event_types)
            .finish()
    }
}

impl<E> EventBus<E> for InMemoryEventBus<E>
where
    E: Event,
{
    fn publish(&self, event: E) -> PublishReport {
        let event_type = event.event_type();
        tracing::debug!(event_type, ?event, "publishing event");

        // A panicking subscriber must not take the log down with it.
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());

        // Clone the list so subscribers run without holding the registry lock
        // (a subscriber may itself subscribe or publish).
        let subscribers: SubscriberList<E> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_type)
            .cloned()
            .unwrap_or_default();

        let mut report = PublishReport::new(event_type);
        for subscriber in subscribers {
            match subscriber.handle(&event) {
                Ok(()) => report.delivered += 1,
                Err(error) => {
                    tracing::warn!(
                        event_type,
                        subscriber = subscriber.name(),
                        error = %error,
                        "event subscriber failed"
                    );
                    report.failures.push(SubscriberFailure {
                        subscriber: subscriber.name().to_string(),
                        error,
                    });
                }
            }
        }

        report
    }

    fn subscribe(&self, event_type: &str, subscriber: Arc<dyn EventSubscriber<E>>) {
        tracing::debug!(event_type, subscriber = subscriber.name(), "subscribing to event");
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event_type.to_string())
            .or_default()
            .push(subscriber);
    }

    fn event_log(&self) -> Vec<E> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn clear_event_log(&self) {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}
