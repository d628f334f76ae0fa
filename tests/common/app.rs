//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use scrawl::server::{build_router, create_app_state, create_app_state_with_factory, AppState};
use scrawl::services::Renderer;

/// Default port baked into test app state (nothing binds to it).
pub const TEST_PORT: u16 = 8001;

/// Test application driving the real router in-process.
pub struct TestApp {
    router: axum::Router,
    pub state: AppState,
}

impl TestApp {
    /// App with the built-in production engine.
    pub fn new() -> Self {
        Self::from_state(create_app_state(TEST_PORT))
    }

    /// App whose engine is the given test renderer.
    pub fn with_renderer(renderer: Arc<dyn Renderer>) -> Self {
        Self::from_state(create_app_state_with_factory(TEST_PORT, move || {
            Ok(renderer)
        }))
    }

    /// App whose engine failed to construct at startup.
    pub fn with_failed_engine() -> Self {
        Self::from_state(create_app_state_with_factory(TEST_PORT, || {
            anyhow::bail!("model weights missing")
        }))
    }

    pub fn from_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Clone of the underlying router, for tests that drive it from
    /// multiple tasks.
    pub fn router(&self) -> axum::Router {
        self.router.clone()
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a raw body and JSON content type
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        self.request(
            Request::post(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make an OPTIONS request with custom headers
    pub async fn options(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::options(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// Make a request with an arbitrary method
    pub async fn request_method(&self, method: &str, path: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Captured response with convenience accessors.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!("Response body is not JSON ({e}): {}", self.text());
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
