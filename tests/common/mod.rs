#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use post_comments::config::AppConfig;
use post_comments::http;
use post_comments::domain::comment::{Comment, NewComment};
use post_comments::domain::post::Post;
use post_comments::infra::memory::InMemoryStore;
use post_comments::infra::store::{Store, StoreError, StoreResult, StoreStats};
use post_comments::AppState;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// FailingStore: every call fails with a backend error
// ---------------------------------------------------------------------------

pub const BACKEND_FAILURE: &str = "connection reset by storage node";

pub struct FailingStore;

impl FailingStore {
    fn fail<T>() -> StoreResult<T> {
        Err(StoreError::Backend(BACKEND_FAILURE.to_string()))
    }
}

impl Store for FailingStore {
    fn create_post(&self, _content: String) -> StoreResult<Post> {
        Self::fail()
    }

    fn get_post(&self, _id: Uuid) -> StoreResult<Post> {
        Self::fail()
    }

    fn list_posts(&self) -> StoreResult<Vec<Post>> {
        Self::fail()
    }

    fn create_comment(&self, _post_id: Uuid, _comment: NewComment) -> StoreResult<Comment> {
        Self::fail()
    }

    fn list_comments(&self, _post_id: Uuid) -> StoreResult<Vec<Comment>> {
        Self::fail()
    }

    fn stats(&self) -> StoreResult<StoreStats> {
        Self::fail()
    }
}

// ---------------------------------------------------------------------------
// TestApp: one fresh in-memory store per test
// ---------------------------------------------------------------------------

pub struct TestApp {
    router: Router,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    body_bytes: bytes::Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body_bytes).unwrap_or(Value::Null)
    }

    pub fn error_message(&self) -> String {
        self.json()["error"].as_str().unwrap_or("").to_string()
    }
}

pub fn app() -> TestApp {
    TestApp::with_config(AppConfig::default())
}

impl TestApp {
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()), config)
    }

    pub fn with_store(store: Arc<dyn Store>, config: AppConfig) -> Self {
        let state = AppState::new(store, &config);
        let router = http::app(state.clone(), &config);
        TestApp { router, state }
    }

    // ------------------------------------------------------------------
    // Low-level request helper
    // ------------------------------------------------------------------
    pub async fn request(&self, method: Method, path: &str, body: Option<Body>) -> TestResponse {
        let builder = Request::builder()
            .method(method)
            .uri(path)
            .header("host", "localhost");

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to collect body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body_bytes,
        }
    }

    // ------------------------------------------------------------------
    // Convenience HTTP helpers
    // ------------------------------------------------------------------
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        let body = Body::from(serde_json::to_string(&body).unwrap());
        self.request(Method::POST, path, Some(body)).await
    }

    /// POST an arbitrary, possibly malformed, body as JSON.
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        self.request(Method::POST, path, Some(Body::from(body.to_string())))
            .await
    }

    // ------------------------------------------------------------------
    // Fixtures
    // ------------------------------------------------------------------
    pub async fn create_post(&self, content: &str) -> String {
        let resp = self.post_json("/posts", json!({ "content": content })).await;
        assert_eq!(resp.status, StatusCode::CREATED, "create post failed");
        resp.json()["id"].as_str().unwrap().to_string()
    }

    pub async fn create_comment(&self, post_id: &str, content: &str) -> Value {
        let resp = self
            .post_json(
                &format!("/posts/{}/comments", post_id),
                json!({ "content": content }),
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED, "create comment failed");
        resp.json()
    }
}
