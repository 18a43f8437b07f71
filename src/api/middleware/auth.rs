//! Bearer token authorization middleware.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::domain::authorizer::{AuthDecision, Authorizer, DenyReason};
use crate::error::AppError;

/// Middleware state: the authorizer plus the scope one route requires.
#[derive(Clone)]
pub struct ScopeGuard {
    authorizer: Arc<dyn Authorizer>,
    scope: Arc<str>,
}

impl ScopeGuard {
    pub fn new(authorizer: Arc<dyn Authorizer>, scope: &str) -> Self {
        Self {
            authorizer,
            scope: Arc::from(scope),
        }
    }
}

/// Authorizes requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authorization Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Ask the [`Authorizer`] for a decision against the guarded scope
/// 3. On allow, insert the [`Claims`](crate::domain::authorizer::Claims)
///    into request extensions and continue
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer`) if the
/// header is missing or malformed, or the token is invalid or expired.
///
/// Returns `403 Forbidden` if the token is valid but lacks the scope.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{middleware, routing::post};
///
/// let guard = ScopeGuard::new(authorizer, "write");
/// let route = post(create_item_handler)
///     .route_layer(middleware::from_fn_with_state(guard, auth::layer));
/// ```
pub async fn layer(
    State(guard): State<ScopeGuard>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::warn!(path = %parts.uri.path(), "Missing or malformed bearer credential");
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    match guard.authorizer.authorize(&token, &guard.scope).await {
        AuthDecision::Allow(claims) => {
            tracing::debug!(sub = %claims.sub, scope = %guard.scope, "Request authorized");
            parts.extensions.insert(claims);
            Ok(next.run(Request::from_parts(parts, body)).await)
        }
        AuthDecision::Deny(DenyReason::MissingScope { required }) => {
            tracing::warn!(required = %required, "Credential lacks required scope");
            Err(AppError::forbidden(
                "Forbidden",
                json!({"reason": "Token does not grant the required scope", "scope": required}),
            ))
        }
        AuthDecision::Deny(DenyReason::Expired) => {
            tracing::warn!("Expired bearer credential");
            Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Token has expired"}),
            ))
        }
        AuthDecision::Deny(DenyReason::InvalidCredential) => {
            tracing::warn!("Invalid bearer credential");
            Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid token"}),
            ))
        }
    }
}
