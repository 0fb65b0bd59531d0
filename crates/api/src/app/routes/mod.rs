use axum::Router;

pub mod system;
pub mod users;

/// Router for the `/api` prefix.
pub fn router() -> Router {
    Router::new().nest("/users", users::router())
}
