use serde::Deserialize;

// Fields are optional so a missing field becomes a 400 with a readable
// message instead of a serde rejection.

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
}

/// `Some(value)` for a present, non-empty field.
pub fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}
