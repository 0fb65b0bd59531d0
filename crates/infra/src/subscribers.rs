//! Default side-effect subscribers for user events.
//!
//! These only log today; a welcome mailer or an audit writer would plug in the
//! same way.

use std::sync::Arc;

use userdesk_events::{EventBus, EventSubscriber, SubscriberError};
use userdesk_users::UserEvent;

/// Logs every created user.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserCreatedLogger;

impl EventSubscriber<UserEvent> for UserCreatedLogger {
    fn name(&self) -> &str {
        "user-created-logger"
    }

    fn handle(&self, event: &UserEvent) -> Result<(), SubscriberError> {
        if let UserEvent::UserCreated(e) = event {
            tracing::info!(
                user_id = %e.user_id,
                name = %e.name,
                email = %e.email,
                "user created notification"
            );
        }
        Ok(())
    }
}

/// Logs every rename.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserUpdatedLogger;

impl EventSubscriber<UserEvent> for UserUpdatedLogger {
    fn name(&self) -> &str {
        "user-updated-logger"
    }

    fn handle(&self, event: &UserEvent) -> Result<(), SubscriberError> {
        if let UserEvent::UserUpdated(e) = event {
            tracing::info!(
                user_id = %e.user_id,
                previous_name = %e.previous_name,
                new_name = %e.new_name,
                "user renamed notification"
            );
        }
        Ok(())
    }
}

/// Attach the default subscribers to `bus`.
pub fn register_default_subscribers<B>(bus: &B)
where
    B: EventBus<UserEvent> + ?Sized,
{
    bus.subscribe(UserEvent::CREATED, Arc::new(UserCreatedLogger));
    bus.subscribe(UserEvent::UPDATED, Arc::new(UserUpdatedLogger));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use userdesk_core::UserId;
    use userdesk_events::InMemoryEventBus;
    use userdesk_users::{Email, UserCreated, UserUpdated};

    #[test]
    fn defaults_subscribe_one_logger_per_event_type() {
        let bus = InMemoryEventBus::<UserEvent>::new();
        register_default_subscribers(&bus);

        assert_eq!(bus.subscriber_count(UserEvent::CREATED), 1);
        assert_eq!(bus.subscriber_count(UserEvent::UPDATED), 1);

        let report = bus.publish(UserEvent::UserCreated(UserCreated {
            user_id: UserId::new(),
            email: Email::parse("log@example.com").unwrap(),
            name: "Logged".to_string(),
            occurred_at: Utc::now(),
        }));
        assert_eq!(report.delivered, 1);
        assert!(report.is_clean());

        let report = bus.publish(UserEvent::UserUpdated(UserUpdated {
            user_id: UserId::new(),
            previous_name: "A".to_string(),
            new_name: "B".to_string(),
            occurred_at: Utc::now(),
        }));
        assert_eq!(report.delivered, 1);
    }
}
