use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;

use crate::shared::infrastructure::memo_store::in_memory::InMemoryMemoStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state(store: Arc<InMemoryMemoStore>) -> AppState {
    AppState::new(store)
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryMemoStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store))
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
