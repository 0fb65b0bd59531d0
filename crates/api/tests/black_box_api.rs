use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{Value, json};

use userdesk_api::app::{AppServices, build_app};
use userdesk_events::EventBus;
use userdesk_users::UserEvent;

struct TestServer {
    base_url: String,
    services: Arc<AppServices>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port, with a handle on the
        // services so tests can inspect the event log.
        let services = Arc::new(AppServices::in_memory());
        let app = build_app(services.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            services,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn event_types(&self) -> Vec<&'static str> {
        use userdesk_events::Event;
        self.services
            .event_bus()
            .event_log()
            .iter()
            .map(|e| e.event_type())
            .collect()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_user(client: &reqwest::Client, srv: &TestServer, email: &str, name: &str) -> Value {
    let res = client
        .post(srv.url("/api/users"))
        .json(&json!({ "email": email, "name": name }))
        .send()
        .await
        .unwrap();
    if res.status() != StatusCode::CREATED {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        panic!("expected 201 Created, got {status} body={body}");
    }
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_and_index_are_public() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");

    let res = client.get(srv.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["endpoints"]["createUser"], "POST /api/users");
}

#[tokio::test]
async fn user_lifecycle_create_rename_query() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Create
    let created = create_user(&client, &srv, "New@Example.com", "New User").await;
    assert_eq!(created["email"], "new@example.com");
    assert_eq!(created["name"], "New User");
    assert!(created["createdAt"].is_string());
    let id = created["id"].as_str().unwrap().to_string();

    // Rename
    let res = client
        .put(srv.url(&format!("/api/users/{id}")))
        .json(&json!({ "name": "Renamed User" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["name"], "Renamed User");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // Query one
    let res = client
        .get(srv.url(&format!("/api/users/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched["name"], "Renamed User");

    // Query all
    let res = client.get(srv.url("/api/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let all: Vec<Value> = res.json().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["id"], id.as_str());

    assert_eq!(srv.event_types(), vec![UserEvent::CREATED, UserEvent::UPDATED]);
}

#[tokio::test]
async fn list_is_empty_on_fresh_service() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/api/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let all: Vec<Value> = res.json().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn missing_fields_and_bad_email_are_bad_requests() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/users"))
        .json(&json!({ "email": "only@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Email and name are required");

    let res = client
        .post(srv.url("/api/users"))
        .json(&json!({ "email": "invalid-email", "name": "Someone" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Invalid email format");
    assert_eq!(body["code"], "validation_error");

    let res = client
        .post(srv.url("/api/users"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert!(srv.event_types().is_empty());
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_user(&client, &srv, "dup@example.com", "First").await;

    let res = client
        .post(srv.url("/api/users"))
        .json(&json!({ "email": "DUP@example.com", "name": "Second" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "User with this email already exists");

    let res = client.get(srv.url("/api/users")).send().await.unwrap();
    let all: Vec<Value> = res.json().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(srv.event_types(), vec![UserEvent::CREATED]);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for id in ["1700000000000", "018f5e2a-7b3c-7d4e-8f90-123456789abc"] {
        let res = client
            .get(srv.url(&format!("/api/users/{id}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "User not found");

        let res = client
            .put(srv.url(&format!("/api/users/{id}")))
            .json(&json!({ "name": "Nobody" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    assert!(srv.event_types().is_empty());
}

#[tokio::test]
async fn blank_rename_is_rejected_and_name_is_kept() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_user(&client, &srv, "keep@example.com", "Keep Me").await;
    let id = created["id"].as_str().unwrap().to_string();

    let res = client
        .put(srv.url(&format!("/api/users/{id}")))
        .json(&json!({ "name": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Name is required");

    let res = client
        .put(srv.url(&format!("/api/users/{id}")))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Name cannot be empty");

    let res = client
        .get(srv.url(&format!("/api/users/{id}")))
        .send()
        .await
        .unwrap();
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched["name"], "Keep Me");
    assert_eq!(srv.event_types(), vec![UserEvent::CREATED]);
}
