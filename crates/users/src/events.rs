use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use userdesk_core::UserId;
use userdesk_events::Event;

use crate::Email;

/// Event: UserCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreated {
    pub user_id: UserId,
    pub email: Email,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: UserUpdated (rename).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdated {
    pub user_id: UserId,
    pub previous_name: String,
    pub new_name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "eventType")]
pub enum UserEvent {
    UserCreated(UserCreated),
    UserUpdated(UserUpdated),
}

impl UserEvent {
    pub const CREATED: &'static str = "UserCreated";
    pub const UPDATED: &'static str = "UserUpdated";

    /// The user this event is about.
    pub fn subject_id(&self) -> UserId {
        match self {
            UserEvent::UserCreated(e) => e.user_id,
            UserEvent::UserUpdated(e) => e.user_id,
        }
    }
}

impl Event for UserEvent {
    fn event_type(&self) -> &'static str {
        match self {
            UserEvent::UserCreated(_) => Self::CREATED,
            UserEvent::UserUpdated(_) => Self::UPDATED,
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            UserEvent::UserCreated(e) => e.occurred_at,
            UserEvent::UserUpdated(e) => e.occurred_at,
        }
    }
}
