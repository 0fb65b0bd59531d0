//! Composition root: every stateful component is constructed here, once, and
//! handed to the handlers that need it. Nothing is global.

use std::sync::Arc;

use userdesk_core::{DomainResult, UserId};
use userdesk_events::{CommandHandler, InMemoryEventBus, QueryHandler};
use userdesk_infra::{
    CreateUserHandler, GetAllUsersHandler, GetUserByIdHandler, InMemoryUserRepository,
    UpdateUserHandler, new_commit_lock, register_default_subscribers,
};
use userdesk_users::{CreateUser, GetAllUsers, GetUserById, UpdateUser, User, UserEvent};

pub type SharedRepository = Arc<InMemoryUserRepository>;
pub type SharedEventBus = Arc<InMemoryEventBus<UserEvent>>;

#[derive(Debug)]
pub struct AppServices {
    repository: SharedRepository,
    event_bus: SharedEventBus,
    create_user: CreateUserHandler<SharedRepository, SharedEventBus>,
    update_user: UpdateUserHandler<SharedRepository, SharedEventBus>,
    get_user_by_id: GetUserByIdHandler<SharedRepository>,
    get_all_users: GetAllUsersHandler<SharedRepository>,
}

impl AppServices {
    /// In-memory repository + bus with the default subscribers attached.
    pub fn in_memory() -> Self {
        let event_bus: SharedEventBus = Arc::new(InMemoryEventBus::new());
        register_default_subscribers(&event_bus);
        Self::with_parts(Arc::new(InMemoryUserRepository::new()), event_bus)
    }

    /// Wire handlers around an existing repository and bus (subscribers are the
    /// caller's business).
    pub fn with_parts(repository: SharedRepository, event_bus: SharedEventBus) -> Self {
        let commit_lock = new_commit_lock();
        Self {
            create_user: CreateUserHandler::with_commit_lock(
                repository.clone(),
                event_bus.clone(),
                commit_lock.clone(),
            ),
            update_user: UpdateUserHandler::with_commit_lock(
                repository.clone(),
                event_bus.clone(),
                commit_lock,
            ),
            get_user_by_id: GetUserByIdHandler::new(repository.clone()),
            get_all_users: GetAllUsersHandler::new(repository.clone()),
            repository,
            event_bus,
        }
    }

    pub fn repository(&self) -> &SharedRepository {
        &self.repository
    }

    pub fn event_bus(&self) -> &SharedEventBus {
        &self.event_bus
    }

    pub async fn create_user(&self, command: CreateUser) -> DomainResult<User> {
        self.create_user.handle(command).await
    }

    pub async fn update_user(&self, command: UpdateUser) -> DomainResult<User> {
        self.update_user.handle(command).await
    }

    pub async fn get_user(&self, user_id: UserId) -> DomainResult<User> {
        self.get_user_by_id.handle(GetUserById { user_id }).await
    }

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.get_all_users.handle(GetAllUsers).await
    }
}
