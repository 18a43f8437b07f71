//! Item route configuration and access policy enforcement.
//!
//! Which operations run behind [`crate::api::middleware::auth`] is decided
//! by the [`AccessPolicy`] held in [`AppState`], not hard-coded here.

use crate::api::handlers::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    preflight_handler, update_item_handler,
};
use crate::api::middleware::auth::{self, ScopeGuard};
use crate::domain::policy::Operation;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{MethodRouter, delete, get, patch, post},
};

/// All item routes.
///
/// # Endpoints
///
/// - `GET     /items`       - List every item
/// - `POST    /items`       - Create an item (write scope in the baseline policy)
/// - `OPTIONS /items`       - CORS preflight
/// - `GET     /items/{id}`  - Fetch one item
/// - `PATCH   /items/{id}`  - Partially update an item
/// - `DELETE  /items/{id}`  - Delete an item
/// - `OPTIONS /items/{id}`  - CORS preflight
///
/// Preflight routes are never gated.
pub fn item_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            gated(state, Operation::GetAll, get(list_items_handler))
                .merge(gated(state, Operation::Create, post(create_item_handler)))
                .options(preflight_handler),
        )
        .route(
            "/items/{id}",
            gated(state, Operation::GetOne, get(get_item_handler))
                .merge(gated(state, Operation::Update, patch(update_item_handler)))
                .merge(gated(state, Operation::Delete, delete(delete_item_handler)))
                .options(preflight_handler),
        )
}

/// Wraps `route` in the auth guard when the policy requires a scope for `operation`.
fn gated(
    state: &AppState,
    operation: Operation,
    route: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    match state.policy.required_scope(operation) {
        Some(scope) => {
            let guard = ScopeGuard::new(state.authorizer.clone(), scope);
            route.route_layer(middleware::from_fn_with_state(guard, auth::layer))
        }
        None => route,
    }
}
