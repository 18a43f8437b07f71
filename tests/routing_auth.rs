mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use item_service::domain::authorizer::Claims;
use item_service::domain::policy::{AccessPolicy, Operation};
use item_service::infrastructure::auth::HmacTokenAuthorizer;
use item_service::infrastructure::persistence::MemoryItemRepository;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_create_without_credential_is_unauthorized() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/items")
        .json(&json!({ "itemId": "abc123" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.header("www-authenticate"), "Bearer");
    assert_eq!(response.json::<Value>()["error"]["code"], "unauthorized");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_with_non_bearer_scheme_is_unauthorized() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/items")
        .add_header("Authorization", "Basic dXNlcjpwYXNz")
        .json(&json!({ "itemId": "abc123" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_with_read_only_token_is_forbidden() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/items")
        .add_header("Authorization", common::bearer(&common::issue_token("read")))
        .json(&json!({ "itemId": "abc123" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["error"]["code"], "forbidden");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_with_foreign_token_is_unauthorized() {
    let (state, store) = common::create_test_state();
    let server = common::make_server(state);

    let foreign = HmacTokenAuthorizer::new("some-other-secret")
        .issue(&Claims {
            sub: "intruder".to_string(),
            scope: "write".to_string(),
            exp: None,
            jti: None,
        })
        .unwrap();

    let response = server
        .post("/items")
        .add_header("Authorization", common::bearer(&foreign))
        .json(&json!({ "itemId": "abc123" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_with_expired_token_is_unauthorized() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let expired = HmacTokenAuthorizer::new(common::SIGNING_SECRET)
        .issue(&Claims {
            sub: "tester".to_string(),
            scope: "write".to_string(),
            exp: Some((Utc::now() - Duration::minutes(5)).timestamp()),
            jti: None,
        })
        .unwrap();

    let response = server
        .post("/items")
        .add_header("Authorization", common::bearer(&expired))
        .json(&json!({ "itemId": "abc123" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_runs_before_body_validation() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    // No credential and no body: the guard answers first.
    let response = server.post("/items").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_baseline_leaves_other_operations_open() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    server.get("/items").await.assert_status_ok();
    server.get("/items/x").await.assert_status_ok();
    server
        .patch("/items/x")
        .json(&json!({ "title": "t" }))
        .await
        .assert_status_ok();
    server.delete("/items/x").await.assert_status_ok();
}

#[tokio::test]
async fn test_operator_can_gate_mutations() {
    let state = common::create_test_state_with(
        Arc::new(MemoryItemRepository::new()),
        AccessPolicy::gating(
            common::WRITE_SCOPE,
            [Operation::Create, Operation::Update, Operation::Delete],
        ),
    );
    let server = common::make_server(state);

    server
        .patch("/items/x")
        .json(&json!({ "title": "t" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .delete("/items/x")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .delete("/items/x")
        .add_header("Authorization", common::bearer(&common::write_token()))
        .await
        .assert_status_ok();

    // Reads stay open.
    server.get("/items").await.assert_status_ok();
}

#[tokio::test]
async fn test_unrouted_method_is_not_allowed() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.put("/items/x").json(&json!({ "title": "t" })).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
