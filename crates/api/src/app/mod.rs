//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: composition root (repository, bus, subscribers, handlers)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router around an existing set of services.
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/", get(routes::system::index))
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(services)),
        )
}

/// Build the router with fresh in-memory services (public entrypoint used by `main.rs`).
pub fn build_default_app() -> Router {
    build_app(Arc::new(AppServices::in_memory()))
}
