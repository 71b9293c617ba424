use crate::shared::infrastructure::memo_store::json_file::JsonFileMemoStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::http::{body_json, empty_request, json_request};
use axum::http::StatusCode;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn runs_the_memo_lifecycle_against_a_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memos.json");
    let app = router(AppState::new(Arc::new(JsonFileMemoStore::new(&path))));

    let response = app.clone().oneshot(empty_request("GET", "/memo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
    assert!(!path.exists());

    for text in ["a", "b", "c"] {
        let body = format!(r#"{{"text":"{text}"}}"#);
        let response = app
            .clone()
            .oneshot(json_request("POST", "/memo", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/memo/2", r#"{"text":"B"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/memo/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/memo/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/memo", r#"{"text":"d"}"#))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"id": 4, "text": "d"})
    );

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        on_disk,
        "[\n  {\n    \"id\": 2,\n    \"text\": \"B\"\n  },\n  {\n    \"id\": 3,\n    \"text\": \"c\"\n  },\n  {\n    \"id\": 4,\n    \"text\": \"d\"\n  }\n]"
    );

    let response = app.oneshot(empty_request("GET", "/memo")).await.unwrap();
    assert_eq!(
        body_json(response).await,
        serde_json::json!([
            {"id": 2, "text": "B"},
            {"id": 3, "text": "c"},
            {"id": 4, "text": "d"}
        ])
    );
}

#[tokio::test]
async fn reports_corrupt_state_as_a_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memos.json");
    std::fs::write(&path, "{ not json").unwrap();
    let app = router(AppState::new(Arc::new(JsonFileMemoStore::new(&path))));

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/memo"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("corrupt state"));

    let response = app
        .oneshot(json_request("POST", "/memo", r#"{"text":"a"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[tokio::test]
async fn refuses_to_create_once_the_highest_id_is_taken() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memos.json");
    let content = r#"[{"id": 18446744073709551615, "text": "a"}]"#;
    std::fs::write(&path, content).unwrap();
    let app = router(AppState::new(Arc::new(JsonFileMemoStore::new(&path))));

    let response = app
        .oneshot(json_request("POST", "/memo", r#"{"text":"b"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "no memo id left after 18446744073709551615"
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
}
