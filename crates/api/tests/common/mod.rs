#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use microcommerce_db::store::InMemoryProductStore;
use tower::ServiceExt;

use microcommerce_api::config::{ServerConfig, StoreBackend};
use microcommerce_api::router::build_app_router;
use microcommerce_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreBackend::Memory,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<InMemoryProductStore>) -> Router {
    let state = AppState {
        products: store,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// Fresh store and a router over it. Keep the store to build further routers.
pub fn fresh_app() -> (Arc<InMemoryProductStore>, Router) {
    let store = Arc::new(InMemoryProductStore::new());
    let app = build_test_app(Arc::clone(&store));
    (store, app)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    with_json(app, Method::POST, uri, json).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PUT, uri, json).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a product through the API and return the id from its `Location` header.
pub async fn create_product(
    store: &Arc<InMemoryProductStore>,
    json: serde_json::Value,
) -> i64 {
    let response = post_json(build_test_app(Arc::clone(store)), "/Produits", json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    location.rsplit('/').next().unwrap().parse().unwrap()
}
