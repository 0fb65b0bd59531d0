//! Command handlers: validate, write, then publish.
//!
//! ```text
//! Command
//!   ↓
//! 1. Validate input (value objects, entity invariants)
//!   ↓
//! 2. Read current state from the repository
//!   ↓
//! 3. Save the new state
//!   ↓
//! 4. Publish the domain event (best-effort, see `userdesk_events::bus`)
//! ```
//!
//! Steps 2–4 run under a commit lock shared by every command handler of one
//! service instance, so check-then-write sequences (duplicate email, previous
//! name capture) cannot interleave and events are logged in commit order.
//!
//! Once step 3 succeeds the command succeeds: subscriber failures during step 4
//! are logged and dropped.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use userdesk_core::{DomainError, DomainResult, Entity, UserId};
use userdesk_events::{CommandHandler, EventBus, PublishReport};
use userdesk_users::{CreateUser, Email, UpdateUser, User, UserCreated, UserEvent, UserUpdated};

use crate::repository::UserRepository;

pub const DUPLICATE_EMAIL: &str = "User with this email already exists";
pub const USER_NOT_FOUND: &str = "User not found";

/// Serializes state-changing commands within one service instance.
pub type CommitLock = Arc<Mutex<()>>;

pub fn new_commit_lock() -> CommitLock {
    Arc::new(Mutex::new(()))
}

fn log_publish_report(report: &PublishReport, user_id: &UserId) {
    if report.is_clean() {
        tracing::debug!(
            event_type = report.event_type,
            %user_id,
            delivered = report.delivered,
            "event delivered"
        );
    } else {
        tracing::warn!(
            event_type = report.event_type,
            %user_id,
            delivered = report.delivered,
            failed = report.failures.len(),
            "event delivered with subscriber failures; state change is kept"
        );
    }
}

/// Handles [`CreateUser`].
#[derive(Debug)]
pub struct CreateUserHandler<R, B> {
    repository: R,
    bus: B,
    commit_lock: CommitLock,
}

impl<R, B> CreateUserHandler<R, B> {
    pub fn new(repository: R, bus: B) -> Self {
        Self::with_commit_lock(repository, bus, new_commit_lock())
    }

    pub fn with_commit_lock(repository: R, bus: B, commit_lock: CommitLock) -> Self {
        Self {
            repository,
            bus,
            commit_lock,
        }
    }
}

#[async_trait]
impl<R, B> CommandHandler for CreateUserHandler<R, B>
where
    R: UserRepository,
    B: EventBus<UserEvent>,
{
    type Cmd = CreateUser;
    type Output = User;
    type Error = DomainError;

    async fn handle(&self, command: CreateUser) -> DomainResult<User> {
        let email = Email::parse(&command.email)?;
        User::ensure_valid_name(&command.name)?;

        let _commit = self.commit_lock.lock().await;

        if self.repository.find_by_email(&email).await.is_some() {
            return Err(DomainError::conflict(DUPLICATE_EMAIL));
        }

        let user = self
            .repository
            .save(User::new(UserId::new(), email, command.name))
            .await;

        let report = self.bus.publish(UserEvent::UserCreated(UserCreated {
            user_id: *user.id(),
            email: user.email().clone(),
            name: user.name().to_string(),
            occurred_at: Utc::now(),
        }));
        log_publish_report(&report, user.id());

        tracing::info!(user_id = %user.id(), email = %user.email(), "user created");
        Ok(user)
    }
}

/// Handles [`UpdateUser`] (rename).
#[derive(Debug)]
pub struct UpdateUserHandler<R, B> {
    repository: R,
    bus: B,
    commit_lock: CommitLock,
}

impl<R, B> UpdateUserHandler<R, B> {
    pub fn new(repository: R, bus: B) -> Self {
        Self::with_commit_lock(repository, bus, new_commit_lock())
    }

    pub fn with_commit_lock(repository: R, bus: B, commit_lock: CommitLock) -> Self {
        Self {
            repository,
            bus,
            commit_lock,
        }
    }
}

#[async_trait]
impl<R, B> CommandHandler for UpdateUserHandler<R, B>
where
    R: UserRepository,
    B: EventBus<UserEvent>,
{
    type Cmd = UpdateUser;
    type Output = User;
    type Error = DomainError;

    async fn handle(&self, command: UpdateUser) -> DomainResult<User> {
        let _commit = self.commit_lock.lock().await;

        let mut user = self
            .repository
            .find_by_id(&command.user_id)
            .await
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))?;

        let previous_name = user.name().to_string();
        // Rejects blank names before anything is written.
        user.update_name(command.new_name)?;

        let user = self.repository.save(user).await;

        let report = self.bus.publish(UserEvent::UserUpdated(UserUpdated {
            user_id: *user.id(),
            previous_name,
            new_name: user.name().to_string(),
            occurred_at: Utc::now(),
        }));
        log_publish_report(&report, user.id());

        tracing::info!(user_id = %user.id(), "user updated");
        Ok(user)
    }
}
