//! Infrastructure + application layer: storage, command/query handlers and
//! event subscribers for the users module.

pub mod commands;
pub mod queries;
pub mod repository;
pub mod subscribers;

pub use commands::{CommitLock, CreateUserHandler, UpdateUserHandler, new_commit_lock};
pub use queries::{GetAllUsersHandler, GetUserByIdHandler};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use subscribers::{UserCreatedLogger, UserUpdatedLogger, register_default_subscribers};
