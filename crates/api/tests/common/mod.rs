#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use formgen_api::config::ServerConfig;
use formgen_api::engine::FormPipeline;
use formgen_api::router::build_app_router;
use formgen_api::state::AppState;
use formgen_core::generation::{FormGenerator, StubGenerator};
use formgen_db::{FormStore, MemoryFormStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        seed_samples: false,
    }
}

/// Build the full application router over an in-memory store and the stub
/// generator.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(StubGenerator), Arc::new(MemoryFormStore::new()))
}

/// Build the full application router with the given collaborators, using
/// the same middleware stack production uses.
pub fn build_test_app_with(
    generator: Arc<dyn FormGenerator>,
    store: Arc<dyn FormStore>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pipeline: Arc::new(FormPipeline::new(generator, store)),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Generate a draft through the API and return its JSON.
pub async fn create_draft(app: Router, prompt: &str) -> Value {
    let response = post_json(
        app,
        "/api/v1/design/generate",
        serde_json::json!({ "prompt": prompt }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
