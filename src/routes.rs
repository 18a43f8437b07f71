//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/items`, `/items/{id}` - Item resource (see [`crate::api::routes`])
//! - `GET /health`           - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - `Access-Control-Allow-Origin` on every response
//! - **Authorization** - Bearer token scope checks, per the access policy
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/items/` matches `/items`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::item_routes(&state))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors::allow_origin_layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
