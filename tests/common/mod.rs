//! Shared helpers for API integration tests.
//!
//! Every test gets its own in-memory SQLite database behind the real router.
//! The pool holds a single connection so the database lives as long as the
//! router does.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use adverts_api::config::DatabaseConfig;
use adverts_api::{create_router, AppState, Database};

/// Test application: the router plus a handle on its database.
pub struct TestApp {
    pub router: Router,
    pub database: Database,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = DatabaseConfig::from_url("sqlite::memory:").with_max_connections(1);
        let database = Database::connect(&config)
            .await
            .expect("in-memory database should initialize");
        let router = create_router(AppState::new(database.clone()));

        Self { router, database }
    }

    /// Send a request and decode the JSON response body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send(request).await
    }

    /// Send a prepared request and decode the JSON response body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Create a user and return its id.
    pub async fn create_user(&self, name: &str, password: &str) -> i64 {
        let (status, body) = self
            .post("/user/", json!({ "name": name, "password": password }))
            .await;
        assert_eq!(status, StatusCode::OK, "unexpected body: {body}");
        body["id"].as_i64().unwrap()
    }

    /// Create an advert and return its id.
    pub async fn create_advert(&self, header: &str, description: &str, owner_id: i64) -> i64 {
        let (status, body) = self
            .post(
                "/adv/",
                json!({ "header": header, "description": description, "owner_id": owner_id }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "unexpected body: {body}");
        body["id"].as_i64().unwrap()
    }
}
