mod common;

use axum::http::{Method, StatusCode};
use axum_test::TestResponse;
use item_service::domain::policy::AccessPolicy;
use serde_json::json;
use std::sync::Arc;

const CORS_HEADERS: [&str; 4] = [
    "access-control-allow-headers",
    "access-control-allow-origin",
    "access-control-allow-methods",
    "access-control-allow-credentials",
];

fn cors_headers(response: &TestResponse) -> Vec<String> {
    CORS_HEADERS
        .iter()
        .map(|name| response.header(*name).to_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_preflight_declares_capabilities() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.method(Method::OPTIONS, "/items").await;

    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-headers"),
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Amz-User-Agent"
    );
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-methods"),
        "OPTIONS,GET,PUT,POST,DELETE"
    );
    assert_eq!(response.header("access-control-allow-credentials"), "false");
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_preflight_identical_across_resources_and_state() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let empty_collection = server.method(Method::OPTIONS, "/items").await;
    let empty_item = server.method(Method::OPTIONS, "/items/abc123").await;

    server
        .post("/items")
        .add_header("Authorization", common::bearer(&common::write_token()))
        .json(&json!({ "itemId": "abc123" }))
        .await
        .assert_status(StatusCode::CREATED);

    let populated_item = server
        .method(Method::OPTIONS, "/items/abc123")
        .add_header("Authorization", "Bearer garbage")
        .await;

    let expected = cors_headers(&empty_collection);
    assert_eq!(cors_headers(&empty_item), expected);
    assert_eq!(cors_headers(&populated_item), expected);
    populated_item.assert_status_ok();
}

#[tokio::test]
async fn test_preflight_never_touches_store_or_auth() {
    let state = common::create_test_state_with(
        Arc::new(common::FailingItemRepository),
        AccessPolicy::baseline(common::WRITE_SCOPE),
    );
    let server = common::make_server(state);

    server
        .method(Method::OPTIONS, "/items")
        .await
        .assert_status_ok();
    server
        .method(Method::OPTIONS, "/items/x")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_regular_responses_allow_any_origin() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let ok = server.get("/items").await;
    let denied = server.post("/items").json(&json!({ "itemId": "x" })).await;

    assert_eq!(ok.header("access-control-allow-origin"), "*");
    assert_eq!(denied.header("access-control-allow-origin"), "*");
}
