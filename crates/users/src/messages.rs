//! Command and query messages for the users module.

use serde::{Deserialize, Serialize};

use userdesk_core::UserId;
use userdesk_events::{Command, Query};

/// Command: CreateUser. Fields are raw caller input; validation happens in the handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
}

/// Command: UpdateUser (rename).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub new_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserById {
    pub user_id: UserId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAllUsers;

impl Command for CreateUser {
    fn command_name(&self) -> &'static str {
        "users.create"
    }
}

impl Command for UpdateUser {
    fn command_name(&self) -> &'static str {
        "users.update"
    }
}

impl Query for GetUserById {
    fn query_name(&self) -> &'static str {
        "users.get_by_id"
    }
}

impl Query for GetAllUsers {
    fn query_name(&self) -> &'static str {
        "users.get_all"
    }
}
