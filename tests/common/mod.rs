#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use item_service::domain::authorizer::Claims;
use item_service::domain::entities::Item;
use item_service::domain::policy::AccessPolicy;
use item_service::domain::repositories::{ItemRepository, StoreError};
use item_service::infrastructure::auth::HmacTokenAuthorizer;
use item_service::infrastructure::persistence::MemoryItemRepository;
use item_service::routes::app_router;
use item_service::state::AppState;
use std::sync::Arc;

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const WRITE_SCOPE: &str = "write";

/// Store whose every operation fails, for exercising 500 paths.
pub struct FailingItemRepository;

#[async_trait]
impl ItemRepository for FailingItemRepository {
    async fn get(&self, _id: &str) -> Result<Option<Item>, StoreError> {
        Err(StoreError::Unavailable("secret-host:5432 refused".into()))
    }

    async fn put(&self, _id: &str, _item: Item) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("secret-host:5432 refused".into()))
    }

    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        Err(StoreError::Unavailable("secret-host:5432 refused".into()))
    }

    async fn update(&self, _id: &str, _fields: Item) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("secret-host:5432 refused".into()))
    }

    async fn delete(&self, _id: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("secret-host:5432 refused".into()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("secret-host:5432 refused".into()))
    }
}

pub fn create_test_state_with(
    repository: Arc<dyn ItemRepository>,
    policy: AccessPolicy,
) -> AppState {
    AppState::new(
        repository,
        "itemId",
        Arc::new(HmacTokenAuthorizer::new(SIGNING_SECRET)),
        policy,
    )
}

/// Baseline state over an in-memory store; the store handle is returned so
/// tests can inspect persisted state directly.
pub fn create_test_state() -> (AppState, Arc<MemoryItemRepository>) {
    let repository = Arc::new(MemoryItemRepository::new());
    let state = create_test_state_with(repository.clone(), AccessPolicy::baseline(WRITE_SCOPE));
    (state, repository)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}

pub fn issue_token(scope: &str) -> String {
    HmacTokenAuthorizer::new(SIGNING_SECRET)
        .issue(&Claims {
            sub: "tester".to_string(),
            scope: scope.to_string(),
            exp: None,
            jti: None,
        })
        .unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn write_token() -> String {
    issue_token(WRITE_SCOPE)
}
