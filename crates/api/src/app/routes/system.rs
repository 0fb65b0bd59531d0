use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::Utc;

pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": Utc::now(),
        })),
    )
}

pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "userdesk CQRS API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /health",
            "createUser": "POST /api/users",
            "getUser": "GET /api/users/:id",
            "getAllUsers": "GET /api/users",
            "updateUser": "PUT /api/users/:id",
        },
    }))
}
