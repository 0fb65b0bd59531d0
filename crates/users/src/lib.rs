//! Users domain module.
//!
//! This crate contains the business rules for users (email value object, user
//! entity, domain events, command/query messages), implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod email;
pub mod events;
pub mod messages;
pub mod user;

pub use email::Email;
pub use events::{UserCreated, UserEvent, UserUpdated};
pub use messages::{CreateUser, GetAllUsers, GetUserById, UpdateUser};
pub use user::User;
