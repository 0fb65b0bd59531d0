//! Commands, queries, domain events and the in-process event bus.

pub mod bus;
pub mod command;
pub mod event;
pub mod handler;
pub mod in_memory_bus;
pub mod subscriber;

pub use bus::{EventBus, PublishReport, SubscriberFailure};
pub use command::{Command, Query};
pub use event::Event;
pub use handler::{CommandHandler, QueryHandler};
pub use in_memory_bus::InMemoryEventBus;
pub use subscriber::{EventSubscriber, FnSubscriber, SubscriberError, from_fn};
