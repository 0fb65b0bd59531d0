//! User repository: storage contract + in-memory backend.
//!
//! The repository is the single owner of stored users. Callers always get
//! clones; to change a user they mutate their copy and `save` it back.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use userdesk_core::{Entity, UserId};
use userdesk_users::{Email, User};

/// Identity-keyed storage for users. Any backend may implement it.
///
/// None of these operations fail under normal operation: "not found" is a
/// `None`/`false`, never an error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Upsert by id; returns the stored user.
    async fn save(&self, user: User) -> User;

    async fn find_by_id(&self, id: &UserId) -> Option<User>;

    /// First user whose (normalized) email matches. Linear scan, no index.
    async fn find_by_email(&self, email: &Email) -> Option<User>;

    /// Snapshot of every stored user, in insertion order.
    ///
    /// The order is stable but carries no meaning callers should rely on.
    async fn find_all(&self) -> Vec<User>;

    /// Remove a user. Returns whether an entry existed.
    async fn delete(&self, id: &UserId) -> bool;
}

#[async_trait]
impl<R> UserRepository for Arc<R>
where
    R: UserRepository + ?Sized,
{
    async fn save(&self, user: User) -> User {
        (**self).save(user).await
    }

    async fn find_by_id(&self, id: &UserId) -> Option<User> {
        (**self).find_by_id(id).await
    }

    async fn find_by_email(&self, email: &Email) -> Option<User> {
        (**self).find_by_email(email).await
    }

    async fn find_all(&self) -> Vec<User> {
        (**self).find_all().await
    }

    async fn delete(&self, id: &UserId) -> bool {
        (**self).delete(id).await
    }
}

#[derive(Debug, Default)]
struct UserTable {
    by_id: HashMap<UserId, User>,
    /// Insertion order of live ids.
    order: Vec<UserId>,
}

/// In-memory repository. State is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> User {
        let mut table = self.inner.write().await;
        let id = *user.id();
        if table.by_id.insert(id, user.clone()).is_none() {
            table.order.push(id);
        }
        user
    }

    async fn find_by_id(&self, id: &UserId) -> Option<User> {
        self.inner.read().await.by_id.get(id).cloned()
    }

    async fn find_by_email(&self, email: &Email) -> Option<User> {
        let table = self.inner.read().await;
        table
            .order
            .iter()
            .filter_map(|id| table.by_id.get(id))
            .find(|u| u.email() == email)
            .cloned()
    }

    async fn find_all(&self) -> Vec<User> {
        let table = self.inner.read().await;
        table
            .order
            .iter()
            .filter_map(|id| table.by_id.get(id))
            .cloned()
            .collect()
    }

    async fn delete(&self, id: &UserId) -> bool {
        let mut table = self.inner.write().await;
        if table.by_id.remove(id).is_none() {
            return false;
        }
        table.order.retain(|existing| existing != id);
        true
    }
}
