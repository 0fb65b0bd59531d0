//! Query handlers: read-only repository access.

use async_trait::async_trait;

use userdesk_core::{DomainError, DomainResult};
use userdesk_events::QueryHandler;
use userdesk_users::{GetAllUsers, GetUserById, User};

use crate::commands::USER_NOT_FOUND;
use crate::repository::UserRepository;

/// Handles [`GetUserById`].
#[derive(Debug)]
pub struct GetUserByIdHandler<R> {
    repository: R,
}

impl<R> GetUserByIdHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> QueryHandler for GetUserByIdHandler<R>
where
    R: UserRepository,
{
    type Qry = GetUserById;
    type Output = User;
    type Error = DomainError;

    async fn handle(&self, query: GetUserById) -> DomainResult<User> {
        self.repository
            .find_by_id(&query.user_id)
            .await
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }
}

/// Handles [`GetAllUsers`]. Never fails.
#[derive(Debug)]
pub struct GetAllUsersHandler<R> {
    repository: R,
}

impl<R> GetAllUsersHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> QueryHandler for GetAllUsersHandler<R>
where
    R: UserRepository,
{
    type Qry = GetAllUsers;
    type Output = Vec<User>;
    type Error = DomainError;

    async fn handle(&self, _query: GetAllUsers) -> DomainResult<Vec<User>> {
        Ok(self.repository.find_all().await)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repository::InMemoryUserRepository;
    use userdesk_core::{Entity, UserId};
    use userdesk_users::Email;

    fn user(email: &str, name: &str) -> User {
        User::new(UserId::new(), Email::parse(email).unwrap(), name)
    }

    #[tokio::test]
    async fn get_user_by_id_returns_stored_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let stored = repo.save(user("test@example.com", "John Doe")).await;
        let handler = GetUserByIdHandler::new(repo);

        let found = handler
            .handle(GetUserById {
                user_id: *stored.id(),
            })
            .await
            .unwrap();
        assert_eq!(found.name(), "John Doe");
    }

    #[tokio::test]
    async fn get_user_by_id_unknown_is_not_found() {
        let handler = GetUserByIdHandler::new(Arc::new(InMemoryUserRepository::new()));
        let err = handler
            .handle(GetUserById {
                user_id: UserId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("User not found"));
    }

    #[tokio::test]
    async fn get_all_users_returns_everything() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = GetAllUsersHandler::new(repo.clone());
        assert!(handler.handle(GetAllUsers).await.unwrap().is_empty());

        repo.save(user("user1@example.com", "User One")).await;
        repo.save(user("user2@example.com", "User Two")).await;

        let all = handler.handle(GetAllUsers).await.unwrap();
        let names: Vec<_> = all.iter().map(User::name).collect();
        assert_eq!(names, vec!["User One", "User Two"]);
    }
}
